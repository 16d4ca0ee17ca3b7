//! Observer pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Observer".to_string(),
            description: "Let components subscribe to an event source and react to changes \
                pushed to them, instead of polling or threading every update through the \
                component tree."
                .to_string(),
            when_to_use: "Use for values that change outside React's render cycle \
                (websocket messages, browser APIs, shared stores) where multiple \
                independent components must stay in sync."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Observer".to_string(),
            description: "A subject keeps a list of subscriber callbacks and notifies them \
                on every change. In React the subscription is wrapped in a hook, typically \
                built on useSyncExternalStore so the component re-renders with a \
                consistent snapshot whenever the subject emits."
                .to_string(),
            problem: "External event sources wired ad hoc: components attach their own \
                listeners in effects, forget cleanup, re-derive state slightly differently, \
                and tear when reads mix with renders. Lifting the value into a root \
                component and passing it down re-renders the whole tree per event."
                .to_string(),
            solution: "One store object owns the value and the subscriber set, exposing \
                subscribe(listener) (returning an unsubscribe) and getSnapshot(). A \
                useStore hook connects it to React via useSyncExternalStore; any component \
                calls the hook and re-renders only when the snapshot changes."
                .to_string(),
            benefits: vec![
                "Components stay decoupled from the event source and from each other"
                    .to_string(),
                "Subscription and cleanup logic exists once, in the store".to_string(),
                "useSyncExternalStore avoids torn reads under concurrent rendering"
                    .to_string(),
                "Only subscribed components re-render on change".to_string(),
            ],
            drawbacks: vec![
                "Update flow is implicit; tracing who reacted to an emission takes tooling"
                    .to_string(),
                "Leaked subscriptions accumulate when unsubscribe is dropped".to_string(),
                "Snapshot identity must be stable or components re-render every emission"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Ad hoc websocket listeners versus a subscribable store".to_string(),
                description: "Each widget managing its own socket listener versus one store \
                    with a subscription hook."
                    .to_string(),
                bad: CodeSample {
                    title: "Every widget wires the socket itself".to_string(),
                    description: "Duplicate listeners, divergent parsing, and a cleanup bug \
                        waiting in every copy."
                        .to_string(),
                    code: r#"function PriceTicker({ symbol }: { symbol: string }) {
  const [price, setPrice] = useState<number | null>(null);

  useEffect(() => {
    socket.addEventListener('message', (event) => {
      const update = JSON.parse(event.data);
      if (update.symbol === symbol) {
        setPrice(update.price);
      }
    });
    // cleanup forgotten: listener leaks on unmount
  }, [symbol]);

  return <span>{price ?? '—'}</span>;
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Store plus useSyncExternalStore".to_string(),
                    description: "The store owns the socket and its subscribers; components \
                        subscribe declaratively."
                        .to_string(),
                    code: r#"function createPriceStore(socket: WebSocket) {
  let prices: Record<string, number> = {};
  const listeners = new Set<() => void>();

  socket.addEventListener('message', (event) => {
    const update = JSON.parse(event.data);
    prices = { ...prices, [update.symbol]: update.price };
    listeners.forEach((listener) => listener());
  });

  return {
    subscribe(listener: () => void): () => void {
      listeners.add(listener);
      return () => listeners.delete(listener);
    },
    getSnapshot(): Record<string, number> {
      return prices;
    },
  };
}

const priceStore = createPriceStore(socket);

function usePrice(symbol: string): number | null {
  const prices = useSyncExternalStore(priceStore.subscribe, priceStore.getSnapshot);
  return prices[symbol] ?? null;
}

function PriceTicker({ symbol }: { symbol: string }) {
  const price = usePrice(symbol);
  return <span>{price ?? '—'}</span>;
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Always return an unsubscribe function and call it in cleanup".to_string(),
                "Keep snapshots immutable; replace, never mutate, so change detection is \
                 reference equality"
                    .to_string(),
                "Use useSyncExternalStore rather than hand-rolled effect subscriptions"
                    .to_string(),
                "Notify subscribers after state is fully updated, never mid-mutation"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Returning a fresh object from getSnapshot on every call, causing infinite \
                 re-renders"
                    .to_string(),
                "Emitting from inside a subscriber callback and creating notification loops"
                    .to_string(),
                "Using an observer store for state that only one component reads".to_string(),
            ],
            related_patterns: vec!["provider-pattern".to_string(), "custom-hook".to_string()],
        },
    }
}
