//! Exception-handling conformance suite
//!
//! Every type below is a minimal fixture registering one invalid shape or
//! exercising one bad stored datum; every test asserts the mapping error
//! that case must trigger. Failures are synchronous and leave the store
//! untouched.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::common::*;

// ============================================================================
// Missing table marker
// ============================================================================

#[derive(Debug, Default)]
struct NoTableMarker {
    key: Option<String>,
}

impl Mappable for NoTableMarker {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<NoTableMarker>> = Lazy::new(|| {
            TypeDescriptor::new("NoTableMarker")
                .constructor(NoTableMarker::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &NoTableMarker| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut NoTableMarker, v| o.key = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn no_table_marker_fails_on_save() {
    let env = TestEnv::new();
    let err = env
        .mapper()
        .save(&mut NoTableMarker::default())
        .unwrap_err();
    assert!(matches!(err, MappingError::MissingTable { .. }));
}

#[test]
fn no_table_marker_fails_on_load() {
    let env = TestEnv::new();
    let err = env.mapper().load::<NoTableMarker, _>("abc").unwrap_err();
    assert!(matches!(err, MappingError::MissingTable { .. }));
}

// ============================================================================
// No reconstructing constructor
// ============================================================================

#[derive(Debug)]
struct NoConstructor {
    key: Option<String>,
    attribute: Option<String>,
}

impl Mappable for NoConstructor {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<NoConstructor>> = Lazy::new(|| {
            // No constructor registered: save works, reconstruction cannot.
            TypeDescriptor::new("NoConstructor")
                .table(TABLE)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &NoConstructor| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut NoConstructor, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("attribute", TypeTag::Str)
                        .getter(|o: &NoConstructor| FieldValue::from_option(o.attribute.clone()))
                        .setter(|o: &mut NoConstructor, v| o.attribute = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn no_constructor_saves_but_fails_on_load() {
    let env = TestEnv::new();
    let mapper = env.mapper();
    let key = next_key();
    let mut obj = NoConstructor {
        key: Some(key.clone()),
        attribute: Some("abc".into()),
    };
    mapper.save(&mut obj).unwrap();
    assert_eq!(env.item_count(), 1);

    let err = mapper.load::<NoConstructor, _>(key).unwrap_err();
    assert_eq!(
        err,
        MappingError::NoDefaultConstructor {
            type_name: "NoConstructor"
        }
    );
}

// ============================================================================
// No discoverable key getter
// ============================================================================

#[derive(Debug, Default)]
struct NoKeyGetter {
    #[allow(dead_code)]
    key: Option<String>,
}

impl Mappable for NoKeyGetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<NoKeyGetter>> = Lazy::new(|| {
            // The key field exposes no accessors at all.
            TypeDescriptor::new("NoKeyGetter")
                .table(TABLE)
                .constructor(NoKeyGetter::default)
        });
        &DESC
    }
}

#[test]
fn no_key_getter_fails_on_save() {
    let env = TestEnv::new();
    let err = env.mapper().save(&mut NoKeyGetter::default()).unwrap_err();
    assert!(matches!(err, MappingError::MissingHashKey { .. }));
}

#[test]
fn no_key_getter_fails_on_load() {
    let env = TestEnv::new();
    let err = env.mapper().load::<NoKeyGetter, _>("abc").unwrap_err();
    assert!(matches!(err, MappingError::MissingHashKey { .. }));
}

// ============================================================================
// Private key getter
// ============================================================================

#[derive(Debug, Default)]
struct PrivateKeyGetter {
    key: Option<String>,
}

impl Mappable for PrivateKeyGetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<PrivateKeyGetter>> = Lazy::new(|| {
            TypeDescriptor::new("PrivateKeyGetter")
                .table(TABLE)
                .constructor(PrivateKeyGetter::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .private_getter(|o: &PrivateKeyGetter| {
                            FieldValue::from_option(o.key.clone())
                        })
                        .private_setter(|o: &mut PrivateKeyGetter, v| o.key = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn private_key_getter_fails_on_save() {
    let env = TestEnv::new();
    let err = env
        .mapper()
        .save(&mut PrivateKeyGetter::default())
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::InaccessibleGetter {
            type_name: "PrivateKeyGetter",
            field: KEY_NAME,
        }
    );
}

#[test]
fn private_key_getter_fails_on_load() {
    let env = TestEnv::new();
    let err = env.mapper().load::<PrivateKeyGetter, _>("abc").unwrap_err();
    assert!(matches!(err, MappingError::InaccessibleGetter { .. }));
}

// ============================================================================
// Private key setter (auto-generated key)
// ============================================================================

#[derive(Debug, Default)]
struct PrivateKeySetter {
    key: Option<String>,
}

impl Mappable for PrivateKeySetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<PrivateKeySetter>> = Lazy::new(|| {
            TypeDescriptor::new("PrivateKeySetter")
                .table(TABLE)
                .constructor(PrivateKeySetter::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .auto_generated()
                        .getter(|o: &PrivateKeySetter| FieldValue::from_option(o.key.clone()))
                        .private_setter(|o: &mut PrivateKeySetter, v| o.key = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn private_key_setter_fails_on_save() {
    // Generation would have to write the key back through the setter.
    let env = TestEnv::new();
    let err = env
        .mapper()
        .save(&mut PrivateKeySetter::default())
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::InaccessibleSetter {
            type_name: "PrivateKeySetter",
            field: KEY_NAME,
        }
    );
}

#[test]
fn private_key_setter_fails_on_load_of_seeded_item() {
    // To trigger this error an item must be present, so insert one
    // directly through the store.
    let env = TestEnv::new();
    env.seed(&[(KEY_NAME, AttrValue::S("abc".into()))]);

    let err = env.mapper().load::<PrivateKeySetter, _>("abc").unwrap_err();
    assert_eq!(
        err,
        MappingError::InaccessibleSetter {
            type_name: "PrivateKeySetter",
            field: KEY_NAME,
        }
    );
}

// ============================================================================
// Private attribute setter
// ============================================================================

#[derive(Debug, Default)]
struct PrivateSetter {
    key: Option<String>,
    string_property: Option<String>,
}

impl Mappable for PrivateSetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<PrivateSetter>> = Lazy::new(|| {
            TypeDescriptor::new("PrivateSetter")
                .table(TABLE)
                .constructor(PrivateSetter::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &PrivateSetter| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut PrivateSetter, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("string_property", TypeTag::Str)
                        .getter(|o: &PrivateSetter| {
                            FieldValue::from_option(o.string_property.clone())
                        })
                        .private_setter(|o: &mut PrivateSetter, v| {
                            o.string_property = v.into_string()
                        }),
                )
        });
        &DESC
    }
}

#[test]
fn private_attribute_setter_fails_only_on_load() {
    let env = TestEnv::new();
    let mapper = env.mapper();
    let key = next_key();
    let mut obj = PrivateSetter {
        key: Some(key.clone()),
        string_property: Some("value".into()),
    };
    // The attribute is readable, so save stores it fine.
    mapper.save(&mut obj).unwrap();

    // Reconstruction has a stored value and no way to apply it.
    let err = mapper.load::<PrivateSetter, _>(key).unwrap_err();
    assert_eq!(
        err,
        MappingError::InaccessibleSetter {
            type_name: "PrivateSetter",
            field: "string_property",
        }
    );
}

// ============================================================================
// Overloaded attribute setter
// ============================================================================

#[derive(Default)]
struct OverloadedSetter {
    key: Option<String>,
    attribute: Option<String>,
}

impl Mappable for OverloadedSetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<OverloadedSetter>> = Lazy::new(|| {
            TypeDescriptor::new("OverloadedSetter")
                .table(TABLE)
                .constructor(OverloadedSetter::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &OverloadedSetter| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut OverloadedSetter, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("attribute", TypeTag::Str)
                        .getter(|o: &OverloadedSetter| FieldValue::from_option(o.attribute.clone()))
                        .setter(|o: &mut OverloadedSetter, v| o.attribute = v.into_string())
                        .setter_param_count(2),
                )
        });
        &DESC
    }
}

#[test]
fn overloaded_setter_fails_on_save() {
    let env = TestEnv::new();
    let mut obj = OverloadedSetter {
        key: Some(next_key()),
        attribute: Some("abc".into()),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::SetterArity {
            type_name: "OverloadedSetter",
            field: "attribute",
            declared: 2,
        }
    );
    assert_eq!(env.item_count(), 0);
}

// ============================================================================
// Setter parameter type mismatched with getter
// ============================================================================

#[derive(Default)]
struct WrongTypeForSetter {
    key: Option<String>,
    attribute: Option<String>,
}

impl Mappable for WrongTypeForSetter {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<WrongTypeForSetter>> = Lazy::new(|| {
            TypeDescriptor::new("WrongTypeForSetter")
                .table(TABLE)
                .constructor(WrongTypeForSetter::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &WrongTypeForSetter| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut WrongTypeForSetter, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("attribute", TypeTag::Str)
                        .getter(|o: &WrongTypeForSetter| {
                            FieldValue::from_option(o.attribute.clone())
                        })
                        .setter(|o: &mut WrongTypeForSetter, v| o.attribute = v.into_string())
                        .setter_param(TypeTag::Int),
                )
        });
        &DESC
    }
}

#[test]
fn mismatched_setter_type_fails_on_save() {
    let env = TestEnv::new();
    let mut obj = WrongTypeForSetter {
        key: Some(next_key()),
        attribute: Some("123".into()),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::SetterTypeMismatch {
            type_name: "WrongTypeForSetter",
            field: "attribute",
            getter: TypeTag::Str,
            setter: TypeTag::Int,
        }
    );
}

// ============================================================================
// Stored data incompatible with the declared field type
// ============================================================================

#[derive(Debug, Default)]
struct NumericFields {
    key: Option<String>,
    integer_property: Option<i64>,
}

impl Mappable for NumericFields {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<NumericFields>> = Lazy::new(|| {
            TypeDescriptor::new("NumericFields")
                .table(TABLE)
                .constructor(NumericFields::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &NumericFields| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut NumericFields, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("integer_property", TypeTag::Int)
                        .getter(|o: &NumericFields| FieldValue::from_option(o.integer_property))
                        .setter(|o: &mut NumericFields, v| o.integer_property = v.into_int()),
                )
        });
        &DESC
    }
}

#[test]
fn string_stored_where_number_expected_fails_on_load() {
    let env = TestEnv::new();
    let key = next_key();
    env.seed(&[
        ("integer_property", AttrValue::S("abc".into())),
        (KEY_NAME, AttrValue::S(key.clone())),
    ]);

    let err = env.mapper().load::<NumericFields, _>(key).unwrap_err();
    assert_eq!(
        err,
        MappingError::AttributeTypeMismatch {
            field: "integer_property".into(),
            expected: TypeTag::Int,
            found: "S".into(),
        }
    );
}

#[test]
fn number_set_stored_where_number_expected_fails_on_load() {
    let env = TestEnv::new();
    let key = next_key();
    env.seed(&[
        (
            "integer_property",
            AttrValue::NS(vec!["1".into(), "2".into(), "3".into()]),
        ),
        (KEY_NAME, AttrValue::S(key.clone())),
    ]);

    let err = env.mapper().load::<NumericFields, _>(key).unwrap_err();
    assert_eq!(
        err,
        MappingError::AttributeTypeMismatch {
            field: "integer_property".into(),
            expected: TypeTag::Int,
            found: "NS".into(),
        }
    );
}

#[test]
fn unset_plain_key_fails_on_save() {
    let env = TestEnv::new();
    let err = env.mapper().save(&mut NumericFields::default()).unwrap_err();
    assert_eq!(
        err,
        MappingError::MissingKeyValue {
            type_name: "NumericFields",
            field: KEY_NAME,
        }
    );
}

// ============================================================================
// Nested mapped object under the restricted conversion schema
// ============================================================================

#[derive(Default)]
struct ComplexType {
    key: Option<String>,
    child: Option<Box<ComplexType>>,
}

impl Mappable for ComplexType {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<ComplexType>> = Lazy::new(|| {
            TypeDescriptor::new("ComplexType")
                .table(TABLE)
                .constructor(ComplexType::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &ComplexType| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut ComplexType, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("child", TypeTag::Document)
                        .getter(|o: &ComplexType| match &o.child {
                            Some(child) => {
                                let mut doc = HashMap::new();
                                if let Some(k) = &child.key {
                                    doc.insert(KEY_NAME.to_string(), FieldValue::Str(k.clone()));
                                }
                                FieldValue::Document(doc)
                            }
                            None => FieldValue::Absent,
                        })
                        .setter(|o: &mut ComplexType, v| {
                            o.child = v.into_document().map(|doc| {
                                let mut child = ComplexType::default();
                                child.key = doc
                                    .get(KEY_NAME)
                                    .and_then(|k| k.clone().into_string());
                                Box::new(child)
                            })
                        }),
                )
        });
        &DESC
    }
}

#[test]
fn nested_object_attribute_rejected_by_scalar_schema() {
    let env = TestEnv::new();
    let mut obj = ComplexType {
        key: Some(next_key()),
        child: Some(Box::new(ComplexType {
            key: Some(next_key()),
            child: None,
        })),
    };
    let err = env.scalar_mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::UnsupportedAttributeType {
            field: "child",
            tag: TypeTag::Document,
            schema: ConversionSchema::Scalar,
        }
    );
    assert_eq!(env.item_count(), 0);
}

// ============================================================================
// Nested mapped object as the hash key
// ============================================================================

#[derive(Default)]
struct ComplexHashKey {
    key: Option<HashMap<String, FieldValue>>,
    attribute: Option<String>,
}

impl Mappable for ComplexHashKey {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<ComplexHashKey>> = Lazy::new(|| {
            TypeDescriptor::new("ComplexHashKey")
                .table(TABLE)
                .constructor(ComplexHashKey::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Document)
                        .getter(|o: &ComplexHashKey| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut ComplexHashKey, v| o.key = v.into_document()),
                )
                .field(
                    FieldDescriptor::attribute("attribute", TypeTag::Str)
                        .getter(|o: &ComplexHashKey| FieldValue::from_option(o.attribute.clone()))
                        .setter(|o: &mut ComplexHashKey, v| o.attribute = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn nested_object_hash_key_fails_on_save() {
    // Keys must be scalar under every conversion schema.
    let env = TestEnv::new();
    let mut parts = HashMap::new();
    parts.insert("inner".to_string(), FieldValue::Str(next_key()));
    let mut obj = ComplexHashKey {
        key: Some(parts),
        attribute: Some("abc".into()),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::UnsupportedKeyType {
            type_name: "ComplexHashKey",
            field: KEY_NAME,
            tag: TypeTag::Document,
        }
    );
}

// ============================================================================
// List attribute under the restricted conversion schema
// ============================================================================

#[derive(Default)]
struct ListAttribute {
    key: Option<String>,
    badly_mapped: Option<Vec<String>>,
}

impl Mappable for ListAttribute {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<ListAttribute>> = Lazy::new(|| {
            TypeDescriptor::new("ListAttribute")
                .table(TABLE)
                .constructor(ListAttribute::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &ListAttribute| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut ListAttribute, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::attribute("badly_mapped", TypeTag::List)
                        .getter(|o: &ListAttribute| match &o.badly_mapped {
                            Some(items) => FieldValue::List(
                                items.iter().map(|s| FieldValue::Str(s.clone())).collect(),
                            ),
                            None => FieldValue::Absent,
                        })
                        .setter(|o: &mut ListAttribute, v| {
                            o.badly_mapped = v.into_list().map(|items| {
                                items
                                    .into_iter()
                                    .filter_map(FieldValue::into_string)
                                    .collect()
                            })
                        }),
                )
        });
        &DESC
    }
}

#[test]
fn list_attribute_rejected_by_scalar_schema() {
    let env = TestEnv::new();
    let mut obj = ListAttribute {
        key: Some(next_key()),
        badly_mapped: Some(vec!["abc".into()]),
    };
    let err = env.scalar_mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::UnsupportedAttributeType {
            field: "badly_mapped",
            tag: TypeTag::List,
            schema: ConversionSchema::Scalar,
        }
    );
}

// ============================================================================
// Fractional version attribute
// ============================================================================

#[derive(Default)]
struct FractionalVersion {
    key: Option<String>,
    version: Option<f64>,
}

impl Mappable for FractionalVersion {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<FractionalVersion>> = Lazy::new(|| {
            TypeDescriptor::new("FractionalVersion")
                .table(TABLE)
                .constructor(FractionalVersion::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &FractionalVersion| FieldValue::from_option(o.key.clone()))
                        .setter(|o: &mut FractionalVersion, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::version("version", TypeTag::Float)
                        .getter(|o: &FractionalVersion| FieldValue::from_option(o.version))
                        .setter(|o: &mut FractionalVersion, v| o.version = v.into_float()),
                )
        });
        &DESC
    }
}

#[test]
fn fractional_version_fails_before_any_write() {
    let env = TestEnv::new();
    let mut obj = FractionalVersion {
        key: Some(next_key()),
        version: Some(0.0),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::FractionalVersion {
            type_name: "FractionalVersion",
            field: "version",
            tag: TypeTag::Float,
        }
    );
    assert_eq!(env.item_count(), 0);
}

// ============================================================================
// Auto-generated keys with ungenerable types
// ============================================================================

#[derive(Default)]
struct AutoGeneratedIntKey {
    key: Option<i64>,
    value: Option<String>,
}

impl Mappable for AutoGeneratedIntKey {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<AutoGeneratedIntKey>> = Lazy::new(|| {
            TypeDescriptor::new("AutoGeneratedIntKey")
                .table(TABLE)
                .constructor(AutoGeneratedIntKey::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Int)
                        .auto_generated()
                        .getter(|o: &AutoGeneratedIntKey| FieldValue::from_option(o.key))
                        .setter(|o: &mut AutoGeneratedIntKey, v| o.key = v.into_int()),
                )
                .field(
                    FieldDescriptor::attribute("value", TypeTag::Str)
                        .getter(|o: &AutoGeneratedIntKey| FieldValue::from_option(o.value.clone()))
                        .setter(|o: &mut AutoGeneratedIntKey, v| o.value = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn auto_generated_integer_hash_key_fails_on_save() {
    let env = TestEnv::new();
    let mut obj = AutoGeneratedIntKey {
        key: None,
        value: Some("fdgfdsgf".into()),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::KeyGeneration {
            type_name: "AutoGeneratedIntKey",
            field: KEY_NAME,
            tag: TypeTag::Int,
        }
    );
}

#[derive(Default)]
struct AutoGeneratedIntRangeKey {
    key: Option<String>,
    rangekey: Option<i64>,
    value: Option<String>,
}

impl Mappable for AutoGeneratedIntRangeKey {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESC: Lazy<TypeDescriptor<AutoGeneratedIntRangeKey>> = Lazy::new(|| {
            TypeDescriptor::new("AutoGeneratedIntRangeKey")
                .table(RANGE_TABLE)
                .constructor(AutoGeneratedIntRangeKey::default)
                .field(
                    FieldDescriptor::hash_key(KEY_NAME, TypeTag::Str)
                        .getter(|o: &AutoGeneratedIntRangeKey| {
                            FieldValue::from_option(o.key.clone())
                        })
                        .setter(|o: &mut AutoGeneratedIntRangeKey, v| o.key = v.into_string()),
                )
                .field(
                    FieldDescriptor::range_key(RANGE_NAME, TypeTag::Int)
                        .auto_generated()
                        .getter(|o: &AutoGeneratedIntRangeKey| FieldValue::from_option(o.rangekey))
                        .setter(|o: &mut AutoGeneratedIntRangeKey, v| o.rangekey = v.into_int()),
                )
                .field(
                    FieldDescriptor::attribute("value", TypeTag::Str)
                        .getter(|o: &AutoGeneratedIntRangeKey| {
                            FieldValue::from_option(o.value.clone())
                        })
                        .setter(|o: &mut AutoGeneratedIntRangeKey, v| o.value = v.into_string()),
                )
        });
        &DESC
    }
}

#[test]
fn auto_generated_integer_range_key_fails_on_save() {
    let env = TestEnv::new();
    let mut obj = AutoGeneratedIntRangeKey {
        key: Some("Bldadsfa".into()),
        rangekey: None,
        value: Some("fdgfdsgf".into()),
    };
    let err = env.mapper().save(&mut obj).unwrap_err();
    assert_eq!(
        err,
        MappingError::KeyGeneration {
            type_name: "AutoGeneratedIntRangeKey",
            field: RANGE_NAME,
            tag: TypeTag::Int,
        }
    );
}
