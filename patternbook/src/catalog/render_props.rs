//! Render Props pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Render Props".to_string(),
            description: "Share stateful behavior by accepting a function prop that receives \
                the state and returns what to render, inverting control over the markup."
                .to_string(),
            when_to_use: "Use when a component owns reusable behavior (mouse tracking, \
                virtualization, data subscription) but callers need full control over what \
                gets rendered with it."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Render Props".to_string(),
            description: "A component encapsulates behavior and exposes its results by \
                calling a caller-supplied function, usually the children prop, with the \
                current state. The caller decides the markup; the component decides the \
                behavior."
                .to_string(),
            problem: "Duplicating the same stateful logic (tracking scroll position, \
                measuring an element, managing hover state) across components that render \
                completely different markup. Inheritance and copy-paste both couple the \
                behavior to one particular view."
                .to_string(),
            solution: "Put the behavior in one component that renders nothing of its own. It \
                invokes its function prop with the current state on every render, so any \
                caller can project that state into its own JSX."
                .to_string(),
            benefits: vec![
                "Behavior is written once and reused under arbitrary markup".to_string(),
                "The data flowing to the view is explicit in the function signature"
                    .to_string(),
                "No naming collisions, unlike HOC prop injection".to_string(),
                "Works well for values that change every render, like cursor position"
                    .to_string(),
            ],
            drawbacks: vec![
                "Deeply nested render-prop components produce hard-to-read JSX pyramids"
                    .to_string(),
                "Inline render functions defeat memoization of the subtree".to_string(),
                "For most new code a custom hook expresses the same reuse more directly"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Mouse tracking duplicated versus shared".to_string(),
                description: "Two components each tracking the cursor versus one MouseTracker \
                    with a render prop."
                    .to_string(),
                bad: CodeSample {
                    title: "Copy-pasted tracking logic".to_string(),
                    description: "Each consumer re-implements the listeners because the logic \
                        is welded to specific markup."
                        .to_string(),
                    code: r#"function Tooltip({ content }: TooltipProps) {
  const [position, setPosition] = useState({ x: 0, y: 0 });

  useEffect(() => {
    const onMove = (e: MouseEvent) => setPosition({ x: e.clientX, y: e.clientY });
    window.addEventListener('mousemove', onMove);
    return () => window.removeEventListener('mousemove', onMove);
  }, []);

  return <div style={{ left: position.x, top: position.y }}>{content}</div>;
}

function Crosshair() {
  const [position, setPosition] = useState({ x: 0, y: 0 });

  useEffect(() => {
    const onMove = (e: MouseEvent) => setPosition({ x: e.clientX, y: e.clientY });
    window.addEventListener('mousemove', onMove);
    return () => window.removeEventListener('mousemove', onMove);
  }, []);

  return <CrosshairLines x={position.x} y={position.y} />;
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "One tracker, any markup".to_string(),
                    description: "MouseTracker owns the listeners; callers own the rendering."
                        .to_string(),
                    code: r#"interface MouseTrackerProps {
  children: (position: { x: number; y: number }) => React.ReactNode;
}

function MouseTracker({ children }: MouseTrackerProps) {
  const [position, setPosition] = useState({ x: 0, y: 0 });

  useEffect(() => {
    const onMove = (e: MouseEvent) => setPosition({ x: e.clientX, y: e.clientY });
    window.addEventListener('mousemove', onMove);
    return () => window.removeEventListener('mousemove', onMove);
  }, []);

  return <>{children(position)}</>;
}

// Usage
<MouseTracker>
  {({ x, y }) => <div style={{ left: x, top: y }}>{content}</div>}
</MouseTracker>

<MouseTracker>
  {({ x, y }) => <CrosshairLines x={x} y={y} />}
</MouseTracker>"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Prefer children as the render prop so usage reads as normal JSX nesting"
                    .to_string(),
                "Type the render function's argument precisely; it is the component's real API"
                    .to_string(),
                "Reach for a custom hook first; keep render props for cases that must \
                 compose inside JSX or span class components"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Nesting several render-prop providers when a single hook call per behavior \
                 would flatten the tree"
                    .to_string(),
                "Passing a new inline function on every render to a memoized child and \
                 wondering why it re-renders"
                    .to_string(),
                "Using a render prop for static configuration that never changes, where a \
                 plain element prop would do"
                    .to_string(),
            ],
            related_patterns: vec![
                "higher-order-component".to_string(),
                "custom-hook".to_string(),
            ],
        },
    }
}
