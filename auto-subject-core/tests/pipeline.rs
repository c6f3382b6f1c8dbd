use auto_subject_core::config::SubjectConfig;
use auto_subject_core::descriptor::{Check, ParamType, ReturnType, SubjectType, WrapperKind};
use auto_subject_core::introspect::{Introspect, SourceIntrospector, ValueType};
use auto_subject_core::matcher::{Category, Matcher, Membership};
use auto_subject_core::pipeline::Pipeline;
use auto_subject_core::types::PrimitiveKind;
use auto_subject_core::{Error, render};
use syn::parse_quote;

fn source() -> syn::File {
    parse_quote! {
        pub struct User {
            pub name: String,
            pub age: u32,
            pub is_admin: bool,
            pub roles: Vec<Role>,
            pub scores: [i32; 3],
            pub attributes: HashMap<String, String>,
            pub nickname: Option<String>,
            pub kind: TypeId,
            password: String,
        }

        impl User {
            pub fn isActive(&self) -> bool { true }
            pub fn getEmail(&self) -> &str { "" }
            pub fn touch(&self) {}
            pub fn marker(&self) -> Box<()> { Box::new(()) }
            pub fn balance(&self) -> Option<f64> { None }
        }
    }
}

fn user() -> ValueType {
    let file = source();
    SourceIntrospector::new(&file.items)
        .introspect(&parse_quote!(User))
        .unwrap()
}

#[test]
fn generates_methods_in_discovery_order() {
    let generated = Pipeline::standard()
        .generate(&user(), &SubjectConfig::default())
        .unwrap();

    assert_eq!(generated.ident, "AutoUser");
    assert_eq!(generated.factory.name, "User");
    assert_eq!(
        generated.method_names(),
        [
            "hasName",
            "hasAge",
            "isAdmin",
            "isNotAdmin",
            "roles",
            "scores",
            "attributes",
            "nickname",
            "kind",
            "isActive",
            "isNotActive",
            "hasEmail",
            "balance",
        ]
    );
}

#[test]
fn method_shapes() {
    let generated = Pipeline::standard()
        .generate(&user(), &SubjectConfig::default())
        .unwrap();

    let has_name = generated.method("hasName").unwrap();
    assert_eq!(has_name.returns, ReturnType::Unit);
    assert!(matches!(has_name.params[0].ty, ParamType::Expected(_)));
    assert!(matches!(has_name.body, Check::Equals { .. }));

    let scores = generated.method("scores").unwrap();
    assert_eq!(
        scores.returns,
        ReturnType::Subject(SubjectType::PrimitiveArray(PrimitiveKind::Int))
    );

    let balance = generated.method("balance").unwrap();
    let double: syn::Type = parse_quote!(f64);
    assert_eq!(
        balance.returns,
        ReturnType::Subject(SubjectType::Optional(WrapperKind::Double, double))
    );

    assert_eq!(generated.method("kind").unwrap().returns, ReturnType::Subject(SubjectType::Class));
}

#[test]
fn generation_is_deterministic() {
    let pipeline = Pipeline::standard();
    let config = SubjectConfig::default();

    let first = pipeline.generate(&user(), &config).unwrap();
    let second = pipeline.generate(&user(), &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        render::render(&first).to_string(),
        render::render(&second).to_string()
    );
}

#[test]
fn invalid_prefix_is_rejected() {
    let config = SubjectConfig {
        prefix: "1Prefix".into(),
        ..SubjectConfig::default()
    };
    let err = Pipeline::standard().generate(&user(), &config).unwrap_err();

    assert_eq!(err, Error::InvalidPrefix("1Prefix".into()));
    assert!(err.to_string().contains("1Prefix"));
}

#[test]
fn invalid_suffix_is_rejected() {
    let config = SubjectConfig {
        suffix: "Sub-ject".into(),
        ..SubjectConfig::default()
    };
    let err = Pipeline::standard().generate(&user(), &config).unwrap_err();

    assert_eq!(err, Error::InvalidSuffix("Sub-ject".into()));
}

#[test]
fn void_accessors_generate_nothing() {
    let file: syn::File = parse_quote! {
        pub struct Probe {}

        impl Probe {
            pub fn marker(&self) -> Box<()> { Box::new(()) }
        }
    };
    let value = SourceIntrospector::new(&file.items)
        .introspect(&parse_quote!(Probe))
        .unwrap();

    assert_eq!(value.properties.len(), 1);
    assert_eq!(
        Pipeline::standard().classify(&value.properties[0]).map(Matcher::category),
        Some(Category::Void)
    );

    let generated = Pipeline::standard()
        .generate(&value, &SubjectConfig::default())
        .unwrap();
    assert!(generated.methods.is_empty());
}

#[test]
fn iterator_objects_stream_only_from_accessors() {
    let file: syn::File = parse_quote! {
        pub struct Feed {
            pub items: Box<dyn Iterator<Item = u8>>,
        }

        impl Feed {
            pub fn totals(&self) -> impl Iterator<Item = i64> + '_ { std::iter::empty() }
        }
    };
    let value = SourceIntrospector::new(&file.items)
        .introspect(&parse_quote!(Feed))
        .unwrap();
    let generated = Pipeline::standard()
        .generate(&value, &SubjectConfig::default())
        .unwrap();

    assert!(generated.method("items").is_none());
    assert!(matches!(
        generated.method("hasItems").unwrap().body,
        Check::Equals { .. }
    ));

    let long: syn::Type = parse_quote!(i64);
    assert_eq!(
        generated.method("totals").unwrap().returns,
        ReturnType::Subject(SubjectType::Stream(WrapperKind::Long, long))
    );
}

#[test]
fn field_and_accessor_with_the_same_canonical_name_collide() {
    let file: syn::File = parse_quote! {
        pub struct Account {
            pub is_admin: bool,
        }

        impl Account {
            pub fn isAdmin(&self) -> bool { self.is_admin }
        }
    };
    let value = SourceIntrospector::new(&file.items)
        .introspect(&parse_quote!(Account))
        .unwrap();
    let err = Pipeline::standard()
        .generate(&value, &SubjectConfig::default())
        .unwrap_err();

    assert_eq!(
        err,
        Error::NameCollision {
            method: "isAdmin".into(),
            first: "is_admin".into(),
            second: "isAdmin".into(),
        }
    );
}

#[test]
fn membership_methods_follow_the_pipeline_configuration() {
    let value = user();
    let config = SubjectConfig::default();

    let plain = Pipeline::standard().generate(&value, &config).unwrap();
    assert!(plain.method("hasRoles").is_none());
    assert!(plain.method("doesNotHaveRoles").is_none());

    let full = Pipeline::builder()
        .membership(Membership::ALL)
        .build()
        .generate(&value, &config)
        .unwrap();
    assert!(matches!(
        full.method("hasRoles").unwrap().body,
        Check::ContainsAll { .. }
    ));
    assert!(matches!(
        full.method("doesNotHaveRoles").unwrap().body,
        Check::ContainsNone { .. }
    ));
}

#[test]
fn enums_generate_identity_checks() {
    let input: syn::DeriveInput = parse_quote! {
        pub enum Status { ACTIVE, SUSPENDED_BY_ADMIN }
    };
    let value = ValueType::from_derive(&input).unwrap();
    let generated = Pipeline::standard()
        .generate(&value, &SubjectConfig::default())
        .unwrap();

    assert_eq!(
        generated.method_names(),
        [
            "isActive",
            "isNotActive",
            "isSuspendedByAdmin",
            "isNotSuspendedByAdmin",
        ]
    );
}

#[test]
fn declarations_fail_independently() {
    let file: syn::File = parse_quote! {
        #[subject]
        pub struct Order {
            pub id: u64,
        }

        pub struct Unannotated {
            pub id: u64,
        }

        #[subject(prefix = "1Bad")]
        pub struct Invoice {
            pub total: f64,
        }

        #[subject(target = Order, suffix = "Check")]
        pub struct OrderCheck;

        #[subject(target = Missing)]
        pub enum Dangling {}

        pub fn unrelated() {}
    };

    let introspector = SourceIntrospector::new(&file.items);
    let results = Pipeline::standard().generate_declarations(&introspector, &file.items);

    assert_eq!(results.len(), 5);

    let order = results[0].as_ref().unwrap();
    assert_eq!(order.ident, "AutoOrder");
    assert_eq!(order.method_names(), ["hasId"]);

    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.declaration, "Unannotated");
    assert_eq!(
        err.source,
        Error::MissingAnnotation {
            declaration: "Unannotated".into()
        }
    );

    let err = results[2].as_ref().unwrap_err();
    assert_eq!(err.declaration, "Invoice");
    assert_eq!(err.source, Error::InvalidPrefix("1Bad".into()));

    let check = results[3].as_ref().unwrap();
    assert_eq!(check.ident, "AutoOrderCheck");
    assert_eq!(check.value.ident, "Order");

    let err = results[4].as_ref().unwrap_err();
    assert_eq!(
        err.source,
        Error::TargetNotFound {
            target: "Missing".into()
        }
    );
}

#[test]
fn malformed_attributes_are_configuration_errors() {
    let file: syn::File = parse_quote! {
        #[subject(package = "x")]
        pub struct Order { pub id: u64 }
    };
    let introspector = SourceIntrospector::new(&file.items);
    let results = Pipeline::standard().generate_declarations(&introspector, &file.items);

    let err = results[0].as_ref().unwrap_err();
    assert!(matches!(err.source, Error::Config(_)));
}
