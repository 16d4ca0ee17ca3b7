//! Builder pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Builder".to_string(),
            description: "Construct complex objects step by step through a chainable API \
                that validates at build time, instead of passing sprawling option objects \
                or long positional argument lists."
                .to_string(),
            when_to_use: "Use when an object has many optional parts, construction order \
                matters, or several call sites assemble similar configurations (API \
                queries, chart configs, test fixtures)."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Builder".to_string(),
            description: "A builder accumulates configuration through fluent methods, each \
                returning the builder (or a progressively narrowed type), and produces the \
                final immutable value from a build() call that can enforce invariants. In \
                TypeScript the builder can encode required steps in the type system so \
                build() only exists once the object is valid."
                .to_string(),
            problem: "Constructors and factory functions with a dozen optional parameters \
                invite mistakes: argument order bugs, half-configured objects escaping, \
                invariants (sort requires an index; from must precede until) checked at use \
                time instead of construction time, or never."
                .to_string(),
            solution: "Replace the parameter list with named, chainable steps. The builder \
                holds partial state privately, applies defaults, and validates everything \
                in build(), returning a complete, immutable value. Invalid combinations \
                can be made unrepresentable by returning narrowed builder types from \
                required steps."
                .to_string(),
            benefits: vec![
                "Call sites read as a sentence; no argument-order bugs".to_string(),
                "Validation runs once, at build time, before the object is used".to_string(),
                "Defaults live in one place instead of every call site".to_string(),
                "Partially applied builders make test fixtures cheap".to_string(),
            ],
            drawbacks: vec![
                "More code than an object literal for simple shapes".to_string(),
                "Chained calls are harder to step through in a debugger".to_string(),
                "Type-state builders (required steps in types) add generic complexity"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Query construction by option object versus builder".to_string(),
                description: "An API query assembled from a loose options bag versus a \
                    validating builder."
                    .to_string(),
                bad: CodeSample {
                    title: "Options bag with implicit rules".to_string(),
                    description: "Nothing enforces that sortBy is an indexed column or that \
                        the date range is ordered; every caller re-learns the rules from \
                        runtime errors."
                        .to_string(),
                    code: r#"const results = await fetchOrders({
  status: 'shipped',
  sortBy: 'customerNote',   // not indexed: fails at the API layer
  from: '2024-06-01',
  until: '2024-01-01',      // inverted range: returns nothing, silently
  page: 0,
  pageSize: 500,            // exceeds server max: clamped without warning
});"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "OrderQueryBuilder".to_string(),
                    description: "Each step is named, defaults are applied in one place, \
                        and build() rejects inconsistent configuration."
                        .to_string(),
                    code: r#"class OrderQueryBuilder {
  private criteria: Partial<OrderQuery> = {};

  status(status: OrderStatus): this {
    this.criteria.status = status;
    return this;
  }

  between(from: Date, until: Date): this {
    if (from > until) {
      throw new Error('Date range is inverted: from must precede until');
    }
    this.criteria.range = { from, until };
    return this;
  }

  sortBy(column: IndexedColumn, direction: 'asc' | 'desc' = 'asc'): this {
    this.criteria.sort = { column, direction };
    return this;
  }

  page(page: number, pageSize = 50): this {
    if (pageSize > MAX_PAGE_SIZE) {
      throw new Error(`pageSize may not exceed ${MAX_PAGE_SIZE}`);
    }
    this.criteria.page = { page, pageSize };
    return this;
  }

  build(): OrderQuery {
    return { page: { page: 0, pageSize: 50 }, ...this.criteria } as OrderQuery;
  }
}

const query = new OrderQueryBuilder()
  .status('shipped')
  .between(new Date('2024-01-01'), new Date('2024-06-01'))
  .sortBy('createdAt', 'desc')
  .build();

const results = await fetchOrders(query);"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Make the built value immutable; the builder is the only mutable phase"
                    .to_string(),
                "Validate relationships between fields in build(), not in consumers"
                    .to_string(),
                "Encode genuinely required steps in the type system (typed column names, \
                 narrowed builder types) so misuse fails to compile"
                    .to_string(),
                "Offer shortcut factories for the common configurations".to_string(),
            ],
            common_mistakes: vec![
                "Builders that are only renamed setters with no validation, adding ceremony \
                 without safety"
                    .to_string(),
                "Reusing one builder instance for several build() calls and leaking state \
                 between them"
                    .to_string(),
                "Wrapping a three-field object that a typed literal already handles"
                    .to_string(),
            ],
            related_patterns: vec!["factory-pattern".to_string()],
        },
    }
}
