//! Factory pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Factory".to_string(),
            description: "Centralize object or component creation behind a function that \
                maps an input (type tag, configuration, environment) to the right concrete \
                instance."
                .to_string(),
            when_to_use: "Use when call sites would otherwise branch on a discriminator to \
                decide what to construct: notification renderers per event type, API \
                clients per environment, form inputs per field kind."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Factory".to_string(),
            description: "A factory owns the mapping from discriminator to concrete \
                implementation. Callers ask for 'the right one' and receive a value behind \
                a common interface; in React the product is often a component chosen from a \
                registry keyed by type."
                .to_string(),
            problem: "Construction knowledge duplicated across call sites: each place that \
                renders a notification or instantiates a client repeats the same \
                switch over types, imports every concrete implementation, and must be \
                updated for each new variant."
                .to_string(),
            solution: "One module owns the type-to-implementation mapping, typically as a \
                Record. Call sites depend on the factory and the common interface only. \
                New variants are registered in one place; unknown discriminators get one \
                deliberate handling policy."
                .to_string(),
            benefits: vec![
                "Construction logic and its imports collapse into one module".to_string(),
                "Call sites stay closed against new variants".to_string(),
                "Unknown-type handling is a single explicit decision".to_string(),
                "Swapping implementations per environment or test is one mapping change"
                    .to_string(),
            ],
            drawbacks: vec![
                "The factory module becomes a dependency hub importing all variants"
                    .to_string(),
                "Indirection hides which concrete component renders where".to_string(),
                "A products union that keeps growing may signal the abstraction is wrong"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "Notification rendering per call site versus a component factory"
                    .to_string(),
                description: "Switching on notification type in JSX versus resolving the \
                    renderer from a registry."
                    .to_string(),
                bad: CodeSample {
                    title: "Type switch at every render site".to_string(),
                    description: "The feed, the toast layer, and the history page each \
                        carry a copy of this branching."
                        .to_string(),
                    code: r#"function NotificationItem({ notification }: { notification: Notification }) {
  if (notification.type === 'mention') {
    return <MentionCard user={notification.actor} snippet={notification.snippet} />;
  }
  if (notification.type === 'follow') {
    return <FollowCard user={notification.actor} />;
  }
  if (notification.type === 'system') {
    return <SystemBanner severity={notification.severity} text={notification.text} />;
  }
  return null; // silently drops unknown types
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Registry-backed factory".to_string(),
                    description: "The mapping lives once; unknown types get one deliberate \
                        fallback."
                        .to_string(),
                    code: r#"interface NotificationCardProps {
  notification: Notification;
}

const cardRegistry: Record<
  Notification['type'],
  React.ComponentType<NotificationCardProps>
> = {
  mention: MentionCard,
  follow: FollowCard,
  system: SystemBanner,
};

function notificationCardFor(
  type: Notification['type'],
): React.ComponentType<NotificationCardProps> {
  return cardRegistry[type] ?? UnknownNotificationCard;
}

function NotificationItem({ notification }: NotificationCardProps) {
  const Card = notificationCardFor(notification.type);
  return <Card notification={notification} />;
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Give every product the same props/interface so callers never branch on \
                 the concrete type"
                    .to_string(),
                "Type the registry as Record over the discriminator union for \
                 exhaustiveness"
                    .to_string(),
                "Decide unknown-type behavior once (fallback component, logged error) \
                 inside the factory"
                    .to_string(),
                "Keep factories flat; resist factory-of-factories until genuinely needed"
                    .to_string(),
            ],
            common_mistakes: vec![
                "Factories returning subtly different prop contracts per variant, pushing \
                 branching back to callers"
                    .to_string(),
                "Re-creating component types inside render (the factory should return \
                 stable references)"
                    .to_string(),
                "Using a factory for a single concrete type 'for flexibility'".to_string(),
            ],
            related_patterns: vec![
                "builder-pattern".to_string(),
                "strategy-pattern".to_string(),
            ],
        },
    }
}
