//! Custom Hook pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Custom Hook".to_string(),
            description: "Extract stateful logic into a reusable function built from React's \
                hooks, leaving components with only rendering concerns."
                .to_string(),
            when_to_use: "Use whenever a component's effect/state logic is reusable, \
                independently testable, or simply large enough to obscure the JSX; the \
                default reuse mechanism in modern React."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Custom Hook".to_string(),
            description: "A function whose name starts with 'use' and which calls other \
                hooks. It packages state, effects, and derived values behind a plain return \
                value, so components consume behavior like a library function."
                .to_string(),
            problem: "Components accumulate interleaved useState and useEffect blocks for \
                unrelated concerns (form state, debouncing, subscriptions), and the same \
                combinations get rewritten across the codebase with small inconsistencies."
                .to_string(),
            solution: "Group each concern's hooks into one function with a descriptive name \
                and a minimal return surface. The hook owns the lifecycle details; the \
                component reads named values and calls named actions."
                .to_string(),
            benefits: vec![
                "Stateful logic becomes reusable without changing the component tree"
                    .to_string(),
                "Hooks can be tested in isolation with renderHook".to_string(),
                "Component bodies shrink to mostly JSX".to_string(),
                "Concerns compose by calling multiple hooks side by side".to_string(),
            ],
            drawbacks: vec![
                "Subject to the rules of hooks (no conditional calls), which constrains \
                 call sites"
                    .to_string(),
                "Overly generic hooks with flag parameters become as opaque as the code \
                 they replaced"
                    .to_string(),
                "Shared mutable state still needs context or a store; a hook alone copies \
                 state per caller"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Debounced search inline versus extracted".to_string(),
                description: "A search box managing debounce timers inline versus the same \
                    logic behind useDebouncedValue."
                    .to_string(),
                bad: CodeSample {
                    title: "Timer plumbing inside the component".to_string(),
                    description: "The debounce mechanics drown out the component's actual \
                        job, and the next search box will copy them."
                        .to_string(),
                    code: r#"function ProductSearch() {
  const [query, setQuery] = useState('');
  const [debounced, setDebounced] = useState('');

  useEffect(() => {
    const timer = setTimeout(() => setDebounced(query), 300);
    return () => clearTimeout(timer);
  }, [query]);

  const results = useProducts(debounced);

  return (
    <div>
      <input value={query} onChange={(e) => setQuery(e.target.value)} />
      <ResultsList results={results} />
    </div>
  );
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "useDebouncedValue".to_string(),
                    description: "The timer logic is named, reusable, and testable on its own."
                        .to_string(),
                    code: r#"function useDebouncedValue<T>(value: T, delayMs: number): T {
  const [debounced, setDebounced] = useState(value);

  useEffect(() => {
    const timer = setTimeout(() => setDebounced(value), delayMs);
    return () => clearTimeout(timer);
  }, [value, delayMs]);

  return debounced;
}

function ProductSearch() {
  const [query, setQuery] = useState('');
  const debouncedQuery = useDebouncedValue(query, 300);
  const results = useProducts(debouncedQuery);

  return (
    <div>
      <input value={query} onChange={(e) => setQuery(e.target.value)} />
      <ResultsList results={results} />
    </div>
  );
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Name hooks after the concern (useDebouncedValue, useOnlineStatus), not the \
                 mechanism"
                    .to_string(),
                "Return the smallest useful surface; prefer named objects over positional \
                 tuples once there are more than two values"
                    .to_string(),
                "Keep each hook to one concern; compose hooks rather than growing one"
                    .to_string(),
                "Memoize returned callbacks with useCallback when consumers may pass them to \
                 memoized children"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Extracting a 'hook' that calls no other hooks; that is just a function and \
                 should be named like one"
                    .to_string(),
                "Returning the entire internal state so callers couple to incidental fields"
                    .to_string(),
                "One mega-hook (useEverything) with boolean parameters selecting behavior"
                    .to_string(),
            ],
            related_patterns: vec![
                "container-presentational".to_string(),
                "provider-pattern".to_string(),
            ],
        },
    }
}
