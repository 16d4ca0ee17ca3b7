//! Provider pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Provider".to_string(),
            description: "Make shared values (theme, session, feature flags) available to a \
                subtree through React context, with a provider component owning the value \
                and a hook guarding access."
                .to_string(),
            when_to_use: "Use when many components at different depths need the same \
                relatively stable value and threading it through props would touch every \
                intermediate layer."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Provider".to_string(),
            description: "A provider component wraps a subtree with createContext's Provider \
                and supplies a value. A companion hook reads the context and fails loudly \
                when no provider is present, making the dependency explicit at every \
                consumer."
                .to_string(),
            problem: "Prop drilling: a value produced near the root is needed in leaves, so \
                every intermediate component gains a pass-through prop it never uses. \
                Refactors touch whole chains, and intermediate components re-render for \
                value changes they do not care about."
                .to_string(),
            solution: "Create a context for the value, a provider component that computes \
                and memoizes it, and a use hook that reads it with a presence check. \
                Intermediate components no longer mention the value at all."
                .to_string(),
            benefits: vec![
                "Eliminates pass-through props across intermediate layers".to_string(),
                "The hook gives a single, typed access point with a clear error when \
                 misused"
                    .to_string(),
                "Providers can be nested to scope or override values per subtree".to_string(),
                "Swapping the provider in tests injects fakes without mocking modules"
                    .to_string(),
            ],
            drawbacks: vec![
                "Every consumer re-renders when the context value changes; one fat context \
                 becomes a performance trap"
                    .to_string(),
                "Dependencies become invisible in component signatures".to_string(),
                "Unmemoized object values trigger re-renders on every provider render"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Theme by drilling versus theme by provider".to_string(),
                description: "A theme threaded through four layers of props versus read \
                    where it is needed."
                    .to_string(),
                bad: CodeSample {
                    title: "Theme threaded through every layer".to_string(),
                    description: "Layout and Sidebar take a theme prop only to hand it on."
                        .to_string(),
                    code: r#"function App() {
  const theme = useMemo(() => buildTheme('dark'), []);
  return <Layout theme={theme} />;
}

function Layout({ theme }: { theme: Theme }) {
  return <Sidebar theme={theme} />;
}

function Sidebar({ theme }: { theme: Theme }) {
  return <NavButton theme={theme} label="Home" />;
}

function NavButton({ theme, label }: { theme: Theme; label: string }) {
  return <button style={{ color: theme.accent }}>{label}</button>;
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "ThemeProvider plus useTheme".to_string(),
                    description: "Only the producer and the consumer mention the theme; the \
                        hook enforces provider presence."
                        .to_string(),
                    code: r#"const ThemeContext = createContext<Theme | null>(null);

function ThemeProvider({ mode, children }: ThemeProviderProps) {
  const theme = useMemo(() => buildTheme(mode), [mode]);
  return <ThemeContext.Provider value={theme}>{children}</ThemeContext.Provider>;
}

function useTheme(): Theme {
  const theme = useContext(ThemeContext);
  if (theme === null) {
    throw new Error('useTheme must be used within a ThemeProvider');
  }
  return theme;
}

function App() {
  return (
    <ThemeProvider mode="dark">
      <Layout />
    </ThemeProvider>
  );
}

function NavButton({ label }: { label: string }) {
  const theme = useTheme();
  return <button style={{ color: theme.accent }}>{label}</button>;
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Memoize the provider value (useMemo) so consumers only re-render on real \
                 changes"
                    .to_string(),
                "Pair every context with a guarding hook; never export the raw context"
                    .to_string(),
                "Split fast-changing and stable values into separate contexts".to_string(),
                "Keep providers near the subtree that needs them rather than hoisting \
                 everything to the root"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Passing a fresh object literal as the provider value every render"
                    .to_string(),
                "Using context for data that only one or two components need".to_string(),
                "Stuffing unrelated values into one context so every consumer re-renders \
                 for all of them"
                    .to_string(),
            ],
            related_patterns: vec![
                "compound-component".to_string(),
                "observer-pattern".to_string(),
            ],
        },
    }
}
