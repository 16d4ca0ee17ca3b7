//! Strategy pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Strategy".to_string(),
            description: "Represent interchangeable behaviors as values conforming to one \
                interface and select between them at runtime, instead of branching on type \
                flags inside the logic."
                .to_string(),
            when_to_use: "Use when the same operation has several variants chosen by input \
                (validation rules per field type, pricing per customer tier, renderers per \
                content kind) and new variants keep arriving."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Strategy".to_string(),
            description: "Define an interface for the varying behavior, implement each \
                variant as a standalone object or function, and have the consuming code \
                depend only on the interface. Variant selection happens once, at the edge, \
                usually via a lookup table."
                .to_string(),
            problem: "Conditional pyramids: every function that cares about a variant \
                switches on the same discriminator, so adding a variant means finding and \
                editing every switch, and variant-specific logic is smeared across the \
                codebase."
                .to_string(),
            solution: "Collect each variant's behavior into one strategy value. A record \
                keyed by the discriminator replaces the switches; the rest of the code \
                calls strategy methods without knowing which variant it holds. TypeScript's \
                Record type makes the table exhaustive."
                .to_string(),
            benefits: vec![
                "Adding a variant is one new entry, not edits across many switches"
                    .to_string(),
                "Each strategy is independently unit-testable".to_string(),
                "Record<Discriminator, Strategy> gives compile-time exhaustiveness"
                    .to_string(),
                "Strategies can be swapped in tests or configured per deployment".to_string(),
            ],
            drawbacks: vec![
                "Indirection: the concrete behavior is one lookup away from the call site"
                    .to_string(),
                "Overkill when there are two stable variants and no growth expected"
                    .to_string(),
                "Strategies sharing state need careful interface design".to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Field validation by switch versus by strategy table".to_string(),
                description: "Validation logic branching on field type in one growing \
                    function versus a table of validators."
                    .to_string(),
                bad: CodeSample {
                    title: "One switch to rule them all".to_string(),
                    description: "Every new field type edits this function, and the email \
                        rules are nowhere near the email field definition."
                        .to_string(),
                    code: r#"function validateField(field: FormField, value: string): string | null {
  switch (field.type) {
    case 'email':
      if (!value.includes('@')) return 'Invalid email address';
      if (value.length > 254) return 'Email too long';
      return null;
    case 'phone':
      if (!/^\+?[0-9 -]{7,15}$/.test(value)) return 'Invalid phone number';
      return null;
    case 'postalCode':
      if (!/^[0-9]{5}$/.test(value)) return 'Invalid postal code';
      return null;
    default:
      return null;
  }
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Validators as a strategy table".to_string(),
                    description: "Each rule lives with its name; the Record type forces an \
                        entry per field type."
                        .to_string(),
                    code: r#"type Validator = (value: string) => string | null;

const validators: Record<FieldType, Validator> = {
  email: (value) => {
    if (!value.includes('@')) return 'Invalid email address';
    if (value.length > 254) return 'Email too long';
    return null;
  },
  phone: (value) =>
    /^\+?[0-9 -]{7,15}$/.test(value) ? null : 'Invalid phone number',
  postalCode: (value) =>
    /^[0-9]{5}$/.test(value) ? null : 'Invalid postal code',
};

function validateField(field: FormField, value: string): string | null {
  return validators[field.type](value);
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Key strategies in a Record so the compiler flags missing variants"
                    .to_string(),
                "Keep the strategy interface minimal; pass context as parameters rather \
                 than growing the interface per variant"
                    .to_string(),
                "Select the strategy once at the boundary and pass the selected value down"
                    .to_string(),
                "Co-locate each strategy with the domain code it belongs to".to_string(),
            ],
            common_mistakes: vec![
                "Strategies that switch on the discriminator internally, recreating the \
                 problem inside the pattern"
                    .to_string(),
                "A default/fallback strategy that silently accepts unknown variants"
                    .to_string(),
                "Extracting strategies before a second variant exists".to_string(),
            ],
            related_patterns: vec!["factory-pattern".to_string(), "state-reducer".to_string()],
        },
    }
}
