//! State Reducer pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "State Reducer".to_string(),
            description: "Centralize a component's state transitions in a reducer of \
                (state, action) pairs, and optionally let callers override transitions by \
                supplying their own reducer."
                .to_string(),
            when_to_use: "Use when several pieces of state change together in response to \
                named events, when the next state depends on the previous one, or when a \
                reusable component must let consumers customize its state logic."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "State Reducer".to_string(),
            description: "State transitions are expressed as a pure reducer over a \
                discriminated union of actions, driven by useReducer. In the inversion-of-\
                control variant, a component accepts a stateReducer prop that wraps its \
                default reducer, letting callers veto or alter specific transitions."
                .to_string(),
            problem: "Components juggling several useState calls update them in scattered \
                event handlers; combinations drift into impossible states (loading && \
                error), and every consumer needing slightly different behavior forces \
                another prop or a fork."
                .to_string(),
            solution: "Model the state as one value and every change as a named action. The \
                reducer is the single place transitions happen, is pure and unit-testable, \
                and can be composed with a caller-supplied reducer for customization."
                .to_string(),
            benefits: vec![
                "Impossible state combinations are ruled out in one place".to_string(),
                "Transitions are pure functions, testable without rendering".to_string(),
                "Action names document every way the state can change".to_string(),
                "The reducer-prop variant customizes behavior without new feature flags"
                    .to_string(),
            ],
            drawbacks: vec![
                "Ceremony (action types, dispatch) is overkill for a single boolean"
                    .to_string(),
                "Consumers overriding transitions can break component invariants".to_string(),
                "Indirect flow: reading a handler no longer shows the state change inline"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Scattered setState versus a reducer".to_string(),
                description: "A data fetching widget with four independent state cells \
                    versus one reducer over a discriminated union."
                    .to_string(),
                bad: CodeSample {
                    title: "Four states, updated piecemeal".to_string(),
                    description: "Nothing prevents loading and error from both being true; \
                        each handler must remember to reset the others."
                        .to_string(),
                    code: r#"function SearchResults({ query }: { query: string }) {
  const [results, setResults] = useState<Result[]>([]);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState<string | null>(null);

  useEffect(() => {
    setLoading(true);
    // Forgot: setError(null)
    searchApi(query)
      .then((data) => {
        setResults(data);
        setLoading(false);
      })
      .catch((err) => {
        setError(err.message);
        setLoading(false);
      });
  }, [query]);

  if (loading && error) {
    // Which one wins?
  }
  /* ... */
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "One reducer, explicit transitions".to_string(),
                    description: "The discriminated union makes each phase exclusive; the \
                        reducer is the only place state changes."
                        .to_string(),
                    code: r#"type SearchState =
  | { status: 'idle' }
  | { status: 'loading' }
  | { status: 'success'; results: Result[] }
  | { status: 'error'; message: string };

type SearchAction =
  | { type: 'SEARCH_STARTED' }
  | { type: 'SEARCH_SUCCEEDED'; results: Result[] }
  | { type: 'SEARCH_FAILED'; message: string };

function searchReducer(state: SearchState, action: SearchAction): SearchState {
  switch (action.type) {
    case 'SEARCH_STARTED':
      return { status: 'loading' };
    case 'SEARCH_SUCCEEDED':
      return { status: 'success', results: action.results };
    case 'SEARCH_FAILED':
      return { status: 'error', message: action.message };
  }
}

function SearchResults({ query }: { query: string }) {
  const [state, dispatch] = useReducer(searchReducer, { status: 'idle' });

  useEffect(() => {
    dispatch({ type: 'SEARCH_STARTED' });
    searchApi(query)
      .then((results) => dispatch({ type: 'SEARCH_SUCCEEDED', results }))
      .catch((err) => dispatch({ type: 'SEARCH_FAILED', message: err.message }));
  }, [query]);

  switch (state.status) {
    case 'idle':
    case 'loading':
      return <Spinner />;
    case 'error':
      return <ErrorBanner message={state.message} />;
    case 'success':
      return <ResultsList results={state.results} />;
  }
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Model state as a discriminated union so each phase carries only its own \
                 data"
                    .to_string(),
                "Name actions after events that happened, not setters to call".to_string(),
                "Keep reducers pure: no fetching, no timers, no reading globals".to_string(),
                "For the reducer-prop variant, run the caller's reducer after the default \
                 one and document which transitions are overridable"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Reducers with side effects, which break time-travel debugging and retries"
                    .to_string(),
                "A single catch-all SET_STATE action, which is useState with extra steps"
                    .to_string(),
                "Mirroring reducer state into separate useState cells that drift out of sync"
                    .to_string(),
            ],
            related_patterns: vec!["custom-hook".to_string(), "strategy-pattern".to_string()],
        },
    }
}
