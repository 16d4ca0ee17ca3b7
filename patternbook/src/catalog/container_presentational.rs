//! Container/Presentational pattern content

use crate::patterns::{
    CodeComparisonExample, CodeSample, DetailedPattern, PatternDefinition, PatternOverview,
};

pub(crate) fn definition() -> PatternDefinition {
    PatternDefinition {
        overview: PatternOverview {
            name: "Container/Presentational".to_string(),
            description: "Split components into containers that own data fetching and state, \
                and presentational components that only render what they are given via props."
                .to_string(),
            when_to_use: "Use when a component mixes data concerns (fetching, caching, \
                mutations) with markup, making it hard to test the rendering or reuse the \
                visual part elsewhere."
                .to_string(),
        },
        detailed: DetailedPattern {
            name: "Container/Presentational".to_string(),
            description: "A structural split that separates how things work from how things \
                look. Containers talk to stores and APIs; presentational components are pure \
                functions of their props."
                .to_string(),
            problem: "Components that fetch data, manage loading and error state, and render \
                markup in one place are hard to test without mocking the network, cannot be \
                reused with different data sources, and force every visual tweak through the \
                data layer's test suite."
                .to_string(),
            solution: "Extract the markup into a presentational component that receives all \
                data and callbacks through props. Keep fetching, state, and side effects in a \
                thin container that renders the presentational component. The presentational \
                half can be exercised in isolation with plain prop values."
                .to_string(),
            benefits: vec![
                "Presentational components are trivially testable with plain props".to_string(),
                "The same view can be driven by different data sources".to_string(),
                "Designers and engineers can iterate on markup without touching data logic"
                    .to_string(),
                "Loading and error handling concentrate in one predictable place".to_string(),
            ],
            drawbacks: vec![
                "Doubles the file count for simple features".to_string(),
                "Prop drilling grows as the presentational tree deepens".to_string(),
                "With hooks, a custom hook often achieves the same split with less ceremony"
                    .to_string(),
            ],
            examples: vec![CodeComparisonExample {
                title: "User list with embedded fetching".to_string(),
                description: "A list component that fetches its own data versus the same view \
                    split into a container and a pure list."
                    .to_string(),
                bad: CodeSample {
                    title: "Fetching and rendering tangled together".to_string(),
                    description: "The markup cannot be rendered in a test or story without a \
                        live endpoint."
                        .to_string(),
                    code: r#"function UserList() {
  const [users, setUsers] = useState<User[]>([]);
  const [loading, setLoading] = useState(true);

  useEffect(() => {
    fetch('/api/users')
      .then((res) => res.json())
      .then((data) => {
        setUsers(data);
        setLoading(false);
      });
  }, []);

  if (loading) return <Spinner />;

  return (
    <ul>
      {users.map((user) => (
        <li key={user.id}>
          <Avatar src={user.avatarUrl} />
          <span>{user.name}</span>
        </li>
      ))}
    </ul>
  );
}"#
                    .to_string(),
                },
                good: CodeSample {
                    title: "Container drives a pure list".to_string(),
                    description: "UserList renders from props alone; UserListContainer owns \
                        the fetch."
                        .to_string(),
                    code: r#"interface UserListProps {
  users: User[];
}

function UserList({ users }: UserListProps) {
  return (
    <ul>
      {users.map((user) => (
        <li key={user.id}>
          <Avatar src={user.avatarUrl} />
          <span>{user.name}</span>
        </li>
      ))}
    </ul>
  );
}

function UserListContainer() {
  const { data: users, isLoading } = useUsers();

  if (isLoading) return <Spinner />;

  return <UserList users={users ?? []} />;
}"#
                    .to_string(),
                },
            }],
            best_practices: vec![
                "Keep presentational components free of hooks that reach outside props \
                 (no data fetching, no global stores)"
                    .to_string(),
                "Name the pair so the relationship is obvious: UserList and UserListContainer"
                    .to_string(),
                "Pass callbacks down instead of letting the view dispatch actions itself"
                    .to_string(),
                "Write stories and snapshot tests against the presentational half".to_string(),
            ],
            common_mistakes: vec![
                "Letting 'presentational' components read from context or stores, which \
                 quietly reintroduces the coupling the split was meant to remove"
                    .to_string(),
                "Creating containers for components that have no data concerns".to_string(),
                "Passing the container's entire state object down instead of the few fields \
                 the view needs"
                    .to_string(),
            ],
            related_patterns: vec!["custom-hook".to_string(), "render-props".to_string()],
        },
    }
}
