//! Code quality fundamentals document content
//!
//! Four principles, each broken into concepts with bad/good comparisons.
//! Built fresh on each call; callers share it behind an `Arc`.

use crate::fundamentals::{Concept, Principle, Principles, QualityFundamentals};
use crate::patterns::{CodeComparisonExample, CodeSample};

/// Build the full code quality fundamentals document.
pub fn quality_fundamentals() -> QualityFundamentals {
    QualityFundamentals {
        overview: "Fundamentals of writing frontend code that stays changeable: four \
            principles that describe what good code optimizes for, with concrete \
            techniques and comparisons for each."
            .to_string(),
        core_philosophy: "Good code is code that is easy to change. Readability, \
            predictability, cohesion, and coupling are not style preferences; they are \
            the four levers that determine how expensive the next change will be. They \
            sometimes pull against each other, and choosing which to favor in a given \
            situation is the actual work of design."
            .to_string(),
        principles: Principles {
            readability: readability(),
            predictability: predictability(),
            cohesion: cohesion(),
            coupling: coupling(),
        },
        balancing_principles: vec![
            "The principles trade off: deduplicating two similar components raises \
             coupling between their call sites; splitting a long function can hurt \
             readability if the pieces are only meaningful together."
                .to_string(),
            "Prefer readability when code is read far more often than changed; prefer \
             low coupling when two areas change on different schedules or by different \
             teams."
                .to_string(),
            "Duplication is cheaper than the wrong abstraction: tolerate repeated code \
             until the pieces demonstrably change for the same reasons."
                .to_string(),
            "Apply the principles to the change you are making now, not speculatively \
             to changes that may never come."
                .to_string(),
        ],
    }
}

fn readability() -> Principle {
    Principle {
        name: "Readability".to_string(),
        description: "Code reads top to bottom without the reader holding hidden context. \
            Reduce the number of things a reader must track at once: name magic values, \
            separate code paths that do not run together, and keep each function at one \
            level of abstraction."
            .to_string(),
        concepts: vec![
            Concept {
                name: "Naming magic values".to_string(),
                description: "Unexplained literals force every reader to reverse-engineer \
                    intent. A named constant states it once."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Timeout literal versus named constant".to_string(),
                    description: "The same delay, with and without its meaning attached."
                        .to_string(),
                    bad: CodeSample {
                        title: "Bare literal".to_string(),
                        description: "Why 300? Animation length? Debounce? Nobody knows \
                            without archaeology."
                            .to_string(),
                        code: r#"await delay(300);
showToast('Saved');"#
                            .to_string(),
                    },
                    good: CodeSample {
                        title: "Named constant".to_string(),
                        description: "The value carries its reason.".to_string(),
                        code: r#"const SAVE_ANIMATION_MS = 300;

await delay(SAVE_ANIMATION_MS);
showToast('Saved');"#
                            .to_string(),
                    },
                }],
                best_practices: vec![
                    "Name any literal whose purpose is not obvious from the call"
                        .to_string(),
                    "Put units in the name (MS, PX, PERCENT) when the type cannot carry \
                     them"
                        .to_string(),
                ],
            },
            Concept {
                name: "Separating non-overlapping paths".to_string(),
                description: "When a component handles exclusive cases with scattered \
                    conditionals, readers must simulate both paths simultaneously. \
                    Splitting the cases into separate components lets each be read alone."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Role-dependent page in one component versus two".to_string(),
                    description: "Viewer and admin behavior disentangled.".to_string(),
                    bad: CodeSample {
                        title: "Branching throughout".to_string(),
                        description: "Every hook and handler checks the role; no single \
                            path is readable on its own."
                            .to_string(),
                        code: r#"function SubmitButton() {
  const isViewer = useRole() === 'viewer';

  useEffect(() => {
    if (isViewer) return;
    showAdminOnboarding();
  }, [isViewer]);

  return isViewer ? (
    <TextButton disabled>Submit</TextButton>
  ) : (
    <Button type="submit">Submit</Button>
  );
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "One component per case".to_string(),
                        description: "The branch happens once; each variant reads straight \
                            through."
                            .to_string(),
                        code: r#"function SubmitButton() {
  const role = useRole();
  return role === 'viewer' ? <ViewerSubmitButton /> : <AdminSubmitButton />;
}

function ViewerSubmitButton() {
  return <TextButton disabled>Submit</TextButton>;
}

function AdminSubmitButton() {
  useEffect(() => {
    showAdminOnboarding();
  }, []);

  return <Button type="submit">Submit</Button>;
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "Branch once, early, into dedicated components instead of sprinkling \
                     the same condition"
                        .to_string(),
                    "If two paths share almost nothing, they are two components regardless \
                     of how similar they look"
                        .to_string(),
                ],
            },
            Concept {
                name: "One level of abstraction per function".to_string(),
                description: "Mixing high-level orchestration with low-level detail makes \
                    readers shift contexts line by line. Keep each function's statements \
                    at the same altitude."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Checkout handler at mixed altitudes".to_string(),
                    description: "Payment orchestration with inline byte-level formatting \
                        versus extracted steps."
                        .to_string(),
                    bad: CodeSample {
                        title: "Orchestration and detail interleaved".to_string(),
                        description: "The reader falls from 'submit an order' to string \
                            padding and back, twice."
                            .to_string(),
                        code: r#"async function handleCheckout(cart: Cart) {
  const lines = cart.items.map(
    (i) => `${i.sku.padEnd(12)} x${String(i.qty).padStart(3)}`,
  );
  const receiptBody = lines.join('\n');
  const order = await submitOrder(cart);
  const masked = order.card.slice(-4).padStart(order.card.length, '*');
  await emailReceipt(order.email, `${receiptBody}\nPaid with ${masked}`);
  router.push(`/orders/${order.id}`);
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "Uniform altitude".to_string(),
                        description: "The handler tells the story; details live in named \
                            helpers."
                            .to_string(),
                        code: r#"async function handleCheckout(cart: Cart) {
  const order = await submitOrder(cart);
  await emailReceipt(order.email, renderReceipt(cart, order));
  router.push(`/orders/${order.id}`);
}

function renderReceipt(cart: Cart, order: Order): string {
  return [renderLineItems(cart.items), renderPaymentLine(order.card)].join('\n');
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "If a function mixes a story with its footnotes, extract the footnotes"
                        .to_string(),
                    "Name helpers after the step they perform, so the caller reads as \
                     prose"
                        .to_string(),
                ],
            },
        ],
    }
}

fn predictability() -> Principle {
    Principle {
        name: "Predictability".to_string(),
        description: "Code behaves the way its name and signature promise. No hidden side \
            effects, no return types that change shape by code path, no two functions \
            with the same name doing different things in different modules."
            .to_string(),
        concepts: vec![
            Concept {
                name: "Revealing hidden logic".to_string(),
                description: "A function that quietly does more than its name says \
                    (fetches and caches, validates and mutates) surprises every caller \
                    who took the name at face value."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "A getter that also writes".to_string(),
                    description: "Fetching user info that secretly logs analytics versus \
                        separated concerns."
                        .to_string(),
                    bad: CodeSample {
                        title: "Side effect hidden in a query".to_string(),
                        description: "Callers running this in a loop just spammed the \
                            analytics pipeline."
                            .to_string(),
                        code: r#"async function getUserProfile(id: string): Promise<Profile> {
  const profile = await api.fetchProfile(id);
  analytics.track('profile_viewed', { id }); // surprise
  return profile;
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "Effects where callers can see them".to_string(),
                        description: "The query is pure; the tracking happens at the \
                            interaction that means 'viewed'."
                            .to_string(),
                        code: r#"async function getUserProfile(id: string): Promise<Profile> {
  return api.fetchProfile(id);
}

function ProfilePage({ id }: { id: string }) {
  const profile = useProfile(id);

  useEffect(() => {
    analytics.track('profile_viewed', { id });
  }, [id]);

  return <ProfileView profile={profile} />;
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "Functions do what their name says and nothing more".to_string(),
                    "Put side effects at the layer that owns the decision, not inside \
                     shared queries"
                        .to_string(),
                ],
            },
            Concept {
                name: "Consistent return shapes".to_string(),
                description: "Similar operations should return similar shapes. A \
                    validation layer where some rules return booleans, some throw, and \
                    some return message strings cannot be composed."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Three validators, three contracts".to_string(),
                    description: "Mixed conventions versus one discriminated result type."
                        .to_string(),
                    bad: CodeSample {
                        title: "Every rule its own convention".to_string(),
                        description: "The caller needs different handling per rule and \
                            will get one of them wrong."
                            .to_string(),
                        code: r#"function checkEmail(value: string): boolean { /* ... */ }
function checkAge(value: number): string | null { /* message or null */ }
function checkUsername(value: string): void { /* throws on failure */ }"#
                            .to_string(),
                    },
                    good: CodeSample {
                        title: "One result type".to_string(),
                        description: "Uniform shape; rules compose with a single reducer."
                            .to_string(),
                        code: r#"type ValidationResult =
  | { ok: true }
  | { ok: false; message: string };

function checkEmail(value: string): ValidationResult { /* ... */ }
function checkAge(value: number): ValidationResult { /* ... */ }
function checkUsername(value: string): ValidationResult { /* ... */ }

function validateForm(values: FormValues): ValidationResult[] {
  return [checkEmail(values.email), checkAge(values.age), checkUsername(values.name)];
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "Pick one result convention per layer and hold to it".to_string(),
                    "Use discriminated unions so failure cases carry their data".to_string(),
                ],
            },
        ],
    }
}

fn cohesion() -> Principle {
    Principle {
        name: "Cohesion".to_string(),
        description: "Code that changes together lives together. Organize by feature \
            rather than by technical kind, and keep each module's contents related by \
            purpose, so a change lands in one place."
            .to_string(),
        concepts: vec![
            Concept {
                name: "Feature-first organization".to_string(),
                description: "Directories split by technical type (components/, hooks/, \
                    utils/) scatter one feature across the tree; every feature change \
                    becomes a multi-directory scavenger hunt."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Type-first versus feature-first layout".to_string(),
                    description: "Where the pieces of a checkout feature live.".to_string(),
                    bad: CodeSample {
                        title: "Split by kind".to_string(),
                        description: "Checkout code in four distant directories."
                            .to_string(),
                        code: r#"src/
  components/CheckoutForm.tsx
  components/CartSummary.tsx
  hooks/useCheckout.ts
  utils/checkoutValidation.ts
  api/checkoutApi.ts"#
                            .to_string(),
                    },
                    good: CodeSample {
                        title: "Split by feature".to_string(),
                        description: "One directory owns the feature; shared code earns \
                            its place in shared/ only when a second feature needs it."
                            .to_string(),
                        code: r#"src/
  features/checkout/
    CheckoutForm.tsx
    CartSummary.tsx
    useCheckout.ts
    validation.ts
    api.ts
  shared/
    components/Button.tsx"#
                            .to_string(),
                    },
                }],
                best_practices: vec![
                    "Group by the reason code changes, which is almost always the feature"
                        .to_string(),
                    "Promote code to shared/ on the second consumer, not preemptively"
                        .to_string(),
                ],
            },
            Concept {
                name: "Keeping related logic in one unit".to_string(),
                description: "A form whose field definitions, validation rules, and \
                    submission mapping live in three files will drift: a new field gets \
                    added to two of the three."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Form field knowledge scattered versus co-located".to_string(),
                    description: "Field list, validation, and payload mapping as one \
                        schema versus three parallel structures."
                        .to_string(),
                    bad: CodeSample {
                        title: "Three parallel lists".to_string(),
                        description: "Adding a field means editing all three and nothing \
                            checks you did."
                            .to_string(),
                        code: r#"// fields.ts
export const FIELDS = ['email', 'age', 'username'];

// validation.ts
export const RULES = { email: isEmail, age: isAdult };  // username forgotten

// payload.ts
export function toPayload(values: Values) {
  return { email: values.email, age: values.age, username: values.username };
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "One schema drives everything".to_string(),
                        description: "The field entry carries its rule and mapping; \
                            adding a field is one edit."
                            .to_string(),
                        code: r#"const formSchema = {
  email: { validate: isEmail, toPayload: (v: string) => v.trim() },
  age: { validate: isAdult, toPayload: Number },
  username: { validate: isUsername, toPayload: (v: string) => v.toLowerCase() },
} satisfies Record<string, FieldSpec>;

const FIELDS = Object.keys(formSchema);
const validate = (values: Values) => runRules(formSchema, values);
const toPayload = (values: Values) => mapFields(formSchema, values);"#
                            .to_string(),
                    },
                }],
                best_practices: vec![
                    "When several structures must stay in sync, derive them from one \
                     source of truth"
                        .to_string(),
                    "Co-locate a hook with the component family that uses it until \
                     someone else needs it"
                        .to_string(),
                ],
            },
        ],
    }
}

fn coupling() -> Principle {
    Principle {
        name: "Coupling".to_string(),
        description: "Minimize what each piece of code knows about the rest. Narrow \
            prop surfaces, no premature abstractions that tie unrelated call sites \
            together, and state scoped to where it is used."
            .to_string(),
        concepts: vec![
            Concept {
                name: "Narrow interfaces".to_string(),
                description: "Passing whole objects where a field would do couples the \
                    component to every field of the object, and every object change to \
                    the component."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Whole-object prop versus the fields used".to_string(),
                    description: "An avatar that takes a User versus the two strings it \
                        renders."
                        .to_string(),
                    bad: CodeSample {
                        title: "Avatar depends on User".to_string(),
                        description: "Reusing this for a bot or an organization now \
                            requires faking a User."
                            .to_string(),
                        code: r#"function Avatar({ user }: { user: User }) {
  return <img src={user.avatarUrl} alt={user.displayName} />;
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "Avatar depends on two strings".to_string(),
                        description: "Any caller with an image and a label can use it."
                            .to_string(),
                        code: r#"function Avatar({ src, alt }: { src: string; alt: string }) {
  return <img src={src} alt={alt} />;
}

<Avatar src={user.avatarUrl} alt={user.displayName} />"#
                            .to_string(),
                    },
                }],
                best_practices: vec![
                    "Props declare exactly what the component reads".to_string(),
                    "Reserve whole-entity props for components that genuinely render the \
                     whole entity"
                        .to_string(),
                ],
            },
            Concept {
                name: "Avoiding premature abstraction".to_string(),
                description: "Merging two similar-looking components into one \
                    configurable unit couples their futures; when they diverge, the \
                    shared component sprouts flags for each caller."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Shared component with divergent callers".to_string(),
                    description: "One Card bent by flags versus two honest components."
                        .to_string(),
                    bad: CodeSample {
                        title: "Flag-riddled shared Card".to_string(),
                        description: "Each boolean exists for exactly one caller; every \
                            change risks the other."
                            .to_string(),
                        code: r#"function Card({
  title,
  compact,
  showFooter,
  isProduct,
  onBuy,
  isArticle,
  readTime,
}: CardProps) {
  return (
    <div className={compact ? 'card-sm' : 'card'}>
      <h3>{title}</h3>
      {isArticle && <span>{readTime} min read</span>}
      {isProduct && <BuyButton onClick={onBuy} />}
      {showFooter && <CardFooter />}
    </div>
  );
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "Two components, shared primitives".to_string(),
                        description: "Each caller owns its layout; real common ground \
                            (the frame) stays shared."
                            .to_string(),
                        code: r#"function ProductCard({ title, onBuy }: ProductCardProps) {
  return (
    <CardFrame>
      <h3>{title}</h3>
      <BuyButton onClick={onBuy} />
    </CardFrame>
  );
}

function ArticleCard({ title, readTime }: ArticleCardProps) {
  return (
    <CardFrame compact>
      <h3>{title}</h3>
      <span>{readTime} min read</span>
    </CardFrame>
  );
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "Share code when pieces change for the same reason, not when they \
                     merely look alike"
                        .to_string(),
                    "When a shared component needs caller-specific flags, split it"
                        .to_string(),
                ],
            },
            Concept {
                name: "Scoping state narrowly".to_string(),
                description: "State hoisted higher than its consumers couples unrelated \
                    components through shared re-renders and shared lifetimes."
                    .to_string(),
                examples: vec![CodeComparisonExample {
                    title: "Page-level state for a local concern".to_string(),
                    description: "A modal's open flag living in the page versus in the \
                        modal's owner."
                        .to_string(),
                    bad: CodeSample {
                        title: "Everything in the page".to_string(),
                        description: "The whole page re-renders on every keystroke in \
                            the rename dialog."
                            .to_string(),
                        code: r#"function ProjectPage() {
  const [isRenameOpen, setRenameOpen] = useState(false);
  const [renameDraft, setRenameDraft] = useState('');
  /* ...page-wide data... */
  return (
    <>
      <ProjectHeader onRename={() => setRenameOpen(true)} />
      <ProjectBoard />
      {isRenameOpen && (
        <RenameDialog value={renameDraft} onChange={setRenameDraft} />
      )}
    </>
  );
}"#
                        .to_string(),
                    },
                    good: CodeSample {
                        title: "State lives with its feature".to_string(),
                        description: "The dialog owns its draft; the page only knows the \
                            dialog exists."
                            .to_string(),
                        code: r#"function ProjectHeader() {
  const [isRenameOpen, setRenameOpen] = useState(false);
  return (
    <>
      <button onClick={() => setRenameOpen(true)}>Rename</button>
      {isRenameOpen && <RenameDialog onClose={() => setRenameOpen(false)} />}
    </>
  );
}

function RenameDialog({ onClose }: { onClose: () => void }) {
  const [draft, setDraft] = useState('');
  /* ... */
}"#
                        .to_string(),
                    },
                }],
                best_practices: vec![
                    "Keep state in the lowest component that covers all its consumers"
                        .to_string(),
                    "Lift state only when a second consumer actually appears".to_string(),
                ],
            },
        ],
    }
}
