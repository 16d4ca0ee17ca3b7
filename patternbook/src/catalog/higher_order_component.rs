//! Higher-Order Component pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Higher-Order Component".to_string(),
            description: "Wrap a component in a function that returns an enhanced component, \
                injecting props or behavior without modifying the original."
                .to_string(),
            when_to_use: "Use for cross-cutting concerns applied uniformly across many \
                components (authentication gates, error boundaries, legacy store \
                connections), especially when class components are still in the tree."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Higher-Order Component".to_string(),
            description: "A higher-order component (HOC) is a function from component to \
                component: it takes a component, wraps it with additional behavior, and \
                returns the wrapper. The enhancement composes with plain function \
                composition."
                .to_string(),
            problem: "The same cross-cutting concern (require a signed-in user, subscribe to \
                a store, measure performance) repeated inside many unrelated components, \
                each copy entangled with that component's own logic."
                .to_string(),
            solution: "Write the concern once as a wrapper. The HOC renders the wrapped \
                component, passing through the caller's props and injecting whatever the \
                concern produces. Components stay unaware of the enhancement."
                .to_string(),
            benefits: vec![
                "Cross-cutting behavior is defined once and applied declaratively".to_string(),
                "Works with class components where hooks cannot".to_string(),
                "Enhancements compose: withAuth(withTheme(Component))".to_string(),
            ],
            drawbacks: vec![
                "Injected props are invisible at the call site and can collide by name"
                    .to_string(),
                "Each HOC adds a wrapper to the tree, complicating debugging".to_string(),
                "Static members and refs need explicit forwarding (hoist-non-react-statics, \
                 forwardRef)"
                    .to_string(),
                "Hooks cover most HOC use cases with less indirection".to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Auth gating repeated versus wrapped".to_string(),
                description: "Authentication checks duplicated per page versus a withAuth \
                    wrapper."
                    .to_string(),
                bad: CodeSample {
                    title: "Every page re-checks auth".to_string(),
                    description: "The redirect logic is copied into each protected page and \
                        drifts out of sync."
                        .to_string(),
                    code: r#"function SettingsPage() {
  const { user, isLoading } = useSession();

  if (isLoading) return <Spinner />;
  if (!user) {
    return <Redirect to="/login" />;
  }

  return <SettingsForm user={user} />;
}

function BillingPage() {
  const { user, isLoading } = useSession();

  if (isLoading) return <Spinner />;
  if (!user) {
    // Slightly different: forgot to preserve the return path
    return <Redirect to="/login?next=/billing" />;
  }

  return <BillingDetails user={user} />;
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "withAuth applied at export".to_string(),
                    description: "One wrapper owns the gate; pages receive the user as an \
                        injected prop."
                        .to_string(),
                    code: r#"interface WithAuthProps {
  user: User;
}

function withAuth<P extends WithAuthProps>(
  Wrapped: React.ComponentType<P>,
): React.ComponentType<Omit<P, keyof WithAuthProps>> {
  function WithAuth(props: Omit<P, keyof WithAuthProps>) {
    const { user, isLoading } = useSession();
    const location = useLocation();

    if (isLoading) return <Spinner />;
    if (!user) {
      return <Redirect to={`/login?next=${location.pathname}`} />;
    }

    return <Wrapped {...(props as P)} user={user} />;
  }
  WithAuth.displayName = `withAuth(${Wrapped.displayName ?? Wrapped.name})`;
  return WithAuth;
}

export default withAuth(SettingsPage);
export default withAuth(BillingPage);"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Set displayName on the wrapper so devtools show what is wrapping what"
                    .to_string(),
                "Pass through all unrecognized props unchanged".to_string(),
                "Apply HOCs at module export, not inside render, or the wrapped type is \
                 recreated every render and loses all state"
                    .to_string(),
                "Type the injected props and subtract them from the public prop type"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Calling a HOC inside a component body, remounting the subtree on every \
                 render"
                    .to_string(),
                "Two HOCs injecting props with the same name, with the outer one silently \
                 winning"
                    .to_string(),
                "Using a HOC where a hook plus a conditional in the component would be \
                 clearer"
                    .to_string(),
            ],
            related_patterns: vec!["render-props".to_string(), "custom-hook".to_string()],
        },
    }
}
