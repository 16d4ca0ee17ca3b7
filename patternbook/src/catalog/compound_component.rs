//! Compound Component pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Compound Component".to_string(),
            description: "Expose a family of components that share implicit state through a \
                common parent, letting callers compose the pieces in JSX instead of \
                configuring one monolith through props."
                .to_string(),
            when_to_use: "Use for widgets like tabs, accordions, menus, and selects where the \
                caller needs control over structure and ordering but the pieces must stay \
                coordinated."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Compound Component".to_string(),
            description: "A parent component owns shared state and provides it to a set of \
                child components through context. The children are exported together \
                (Tabs, Tabs.List, Tabs.Panel) and only make sense composed under the parent."
                .to_string(),
            problem: "Configurable monolith components accumulate props for every structural \
                variation: items arrays, renderItem callbacks, flags for each optional \
                region. Every new layout need becomes another prop, and the component's \
                internals become a rendering interpreter for its own configuration format."
                .to_string(),
            solution: "Move the structure back into JSX. The parent creates a context with \
                the shared state (active tab, open sections); each child reads the context \
                and renders one piece. Callers compose the children directly, reordering or \
                omitting them without new props."
                .to_string(),
            benefits: vec![
                "Callers control structure with plain JSX composition".to_string(),
                "No prop explosion on the parent component".to_string(),
                "Each sub-component stays small and single-purpose".to_string(),
                "Internal state stays private; only the pieces that need it read the context"
                    .to_string(),
            ],
            drawbacks: vec![
                "Sub-components fail confusingly when rendered outside their parent"
                    .to_string(),
                "The implicit context contract is invisible in prop types".to_string(),
                "Harder to enforce required structure than with a configured component"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Tabs as a monolith versus a compound family".to_string(),
                description: "A tabs widget configured through arrays versus one composed \
                    from cooperating children."
                    .to_string(),
                bad: CodeSample {
                    title: "Configuration-object tabs".to_string(),
                    description: "Structure is data, so every layout variation needs another \
                        prop or callback."
                        .to_string(),
                    code: r#"<Tabs
  items={[
    { id: 'account', label: 'Account', content: <AccountPanel /> },
    { id: 'billing', label: 'Billing', content: <BillingPanel /> },
  ]}
  renderLabel={(item) => <strong>{item.label}</strong>}
  showBorder
  tabPosition="top"
/>"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Composable tabs".to_string(),
                    description: "The parent shares the active tab through context; children \
                        coordinate without configuration."
                        .to_string(),
                    code: r#"const TabsContext = createContext<TabsState | null>(null);

function Tabs({ defaultTab, children }: TabsProps) {
  const [activeTab, setActiveTab] = useState(defaultTab);
  return (
    <TabsContext.Provider value={{ activeTab, setActiveTab }}>
      {children}
    </TabsContext.Provider>
  );
}

Tabs.Tab = function Tab({ id, children }: TabProps) {
  const { activeTab, setActiveTab } = useTabsContext();
  return (
    <button aria-selected={activeTab === id} onClick={() => setActiveTab(id)}>
      {children}
    </button>
  );
};

Tabs.Panel = function Panel({ id, children }: PanelProps) {
  const { activeTab } = useTabsContext();
  return activeTab === id ? <div role="tabpanel">{children}</div> : null;
};

// Usage: structure lives in JSX
<Tabs defaultTab="account">
  <Tabs.Tab id="account">Account</Tabs.Tab>
  <Tabs.Tab id="billing">Billing</Tabs.Tab>
  <Tabs.Panel id="account"><AccountPanel /></Tabs.Panel>
  <Tabs.Panel id="billing"><BillingPanel /></Tabs.Panel>
</Tabs>"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Throw a descriptive error from the context hook when a child is rendered \
                 outside its parent"
                    .to_string(),
                "Export the family together (Tabs.Tab, Tabs.Panel) so discovery is automatic"
                    .to_string(),
                "Keep the shared context minimal; pass everything else as normal props"
                    .to_string(),
                "Handle accessibility wiring (roles, aria attributes) inside the family so \
                 callers cannot forget it"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Putting per-child display options into the shared context instead of child \
                 props"
                    .to_string(),
                "Using React.Children.map and cloneElement to inject props, which breaks as \
                 soon as a caller wraps a child in another element"
                    .to_string(),
                "Letting sub-components silently render nothing when the context is missing"
                    .to_string(),
            ],
            related_patterns: vec!["provider-pattern".to_string(), "custom-hook".to_string()],
        },
    }
}
