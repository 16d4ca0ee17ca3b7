//! Adapter pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Adapter".to_string(),
            description: "Wrap an external interface (API response shape, third-party \
                library, legacy module) behind a translation layer that exposes the shape \
                your application actually wants."
                .to_string(),
            when_to_use: "Use at every boundary you do not control: REST/GraphQL payloads, \
                SDK callbacks, storage formats, or a library you may need to replace."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Adapter".to_string(),
            description: "An adapter converts between the interface a dependency provides \
                and the interface the application defines for itself. Domain types belong \
                to the application; the adapter is the only code that knows both shapes, \
                so external changes stop at the boundary."
                .to_string(),
            problem: "External shapes leak inward: snake_case API fields, nullable \
                everything, and vendor-specific enums spread through components and state. \
                When the API renames a field or the vendor is swapped, the change ripples \
                through every file that touched the raw shape."
                .to_string(),
            solution: "Define the domain type the application wants, then write a function \
                per boundary that converts the external representation into it (and back, \
                for writes). Components and stores import only the domain type; the \
                adapter module is the single place that imports the external one."
                .to_string(),
            benefits: vec![
                "API and vendor changes are absorbed in one module".to_string(),
                "Domain types can be strict (non-null, narrowed unions) even over sloppy \
                 sources"
                    .to_string(),
                "Swapping a dependency means writing one new adapter".to_string(),
                "Adapters are pure functions, easy to test with recorded payloads"
                    .to_string(),
            ],
            drawbacks: vec![
                "A mapping layer to maintain alongside each external contract".to_string(),
                "Near-identical shapes make the duplication feel gratuitous until the first \
                 divergence"
                    .to_string(),
                "Conversion cost on hot paths with very large payloads".to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "API shape leaking versus adapted at the boundary".to_string(),
                description: "Components consuming the raw wire format versus a domain type \
                    produced by an adapter."
                    .to_string(),
                bad: CodeSample {
                    title: "Wire format everywhere".to_string(),
                    description: "snake_case fields and nullable strings reach the leaf \
                        components; a field rename breaks every one of them."
                        .to_string(),
                    code: r#"function OrderRow({ order }: { order: ApiOrder }) {
  return (
    <tr>
      <td>{order.order_id}</td>
      <td>{order.customer_name ?? 'Unknown'}</td>
      <td>{order.total_cents != null ? formatMoney(order.total_cents / 100) : '—'}</td>
      <td>{order.status_code === 3 ? 'Shipped' : 'Pending'}</td>
    </tr>
  );
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Adapter produces the domain type".to_string(),
                    description: "One function knows the wire format; everything else uses \
                        the clean Order."
                        .to_string(),
                    code: r#"interface Order {
  id: string;
  customerName: string;
  total: Money;
  status: 'pending' | 'shipped' | 'delivered';
}

const STATUS_BY_CODE: Record<number, Order['status']> = {
  1: 'pending',
  3: 'shipped',
  4: 'delivered',
};

function toOrder(api: ApiOrder): Order {
  return {
    id: api.order_id,
    customerName: api.customer_name ?? 'Unknown customer',
    total: moneyFromCents(api.total_cents ?? 0),
    status: STATUS_BY_CODE[api.status_code] ?? 'pending',
  };
}

async function fetchOrders(): Promise<Order[]> {
  const response = await http.get<ApiOrder[]>('/orders');
  return response.data.map(toOrder);
}

function OrderRow({ order }: { order: Order }) {
  return (
    <tr>
      <td>{order.id}</td>
      <td>{order.customerName}</td>
      <td>{formatMoney(order.total)}</td>
      <td>{order.status}</td>
    </tr>
  );
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Define domain types from what the application needs, not from what the \
                 API returns"
                    .to_string(),
                "Convert immediately at the fetch/write boundary; nothing past it sees the \
                 wire shape"
                    .to_string(),
                "Handle nullability and unknown enum values inside the adapter, once"
                    .to_string(),
                "Test adapters against captured real payloads, including malformed ones"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Re-exporting the external type as the domain type with a type alias"
                    .to_string(),
                "Adapting in some call sites but not others, so both shapes circulate"
                    .to_string(),
                "Adapters that also fetch, cache, and log, growing into a service layer"
                    .to_string(),
            ],
            related_patterns: vec!["factory-pattern".to_string()],
        },
    }
}
