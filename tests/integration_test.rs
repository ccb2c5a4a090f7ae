mod convert_test {
    use pretty_assertions::assert_eq;
    use remold::{
        convert, converters, impl_newtype, impl_record, ConvertError, ConvertFn, FieldMap, MapFn,
        Value,
    };

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct Foo {
        first: i64,
        second: String,
    }

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct Bar {
        first_field: i64,
        second_field: Slug,
    }

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct Slug(String);

    impl Slug {
        fn new(s: String) -> Self {
            Slug(s.trim().replace(' ', "-"))
        }
    }

    impl_record! {
        Foo { first: i64, second: String }
        Bar { first_field: i64, second_field: Slug }
    }

    impl_newtype! {
        Slug
    }

    fn foo() -> Foo {
        Foo {
            first: 1,
            second: "  this is my foo   ".to_string(),
        }
    }

    #[test]
    fn widening_works() {
        let widened: f64 = convert(42, converters![]).unwrap();
        assert_eq!(widened, 42.0);
        let narrowed: i64 = convert(1.5, converters![]).unwrap();
        assert_eq!(narrowed, 1);
        let identity: i64 = convert(7, converters![]).unwrap();
        assert_eq!(identity, 7);
    }

    #[test]
    fn unregistered_target_fails() {
        let result: Result<Bar, _> = convert(true, converters![]);
        assert_eq!(
            result,
            Err(ConvertError::NoConversionFound("Bar".to_string()))
        );
    }

    #[test]
    fn specific_beats_generic() {
        let specific_first = converters![
            ConvertFn::<String, i64>::new(|n| Ok(format!("int {n}"))),
            MapFn::<String, Value>::new(|v| format!("any {v}")),
        ];
        let converted: String = convert(5, specific_first.clone()).unwrap();
        assert_eq!(converted, "int 5");

        // the generic converter still serves every other source
        let fallback: String = convert(true, specific_first).unwrap();
        assert_eq!(fallback, "any true");

        // registration order does not change which converter wins for the
        // specific source
        let generic_first = converters![
            MapFn::<String, Value>::new(|v| format!("any {v}")),
            ConvertFn::<String, i64>::new(|n| Ok(format!("int {n}"))),
        ];
        let converted: String = convert(5, generic_first).unwrap();
        assert_eq!(converted, "int 5");
    }

    #[test]
    fn field_mapping_round_trip_works() {
        let bar: Bar = convert(
            foo(),
            converters![
                MapFn::<Slug, String>::new(Slug::new),
                FieldMap::<Bar, Foo>::new([
                    ("first_field", "first"),
                    ("second_field", "second"),
                ]),
            ],
        )
        .unwrap();
        assert_eq!(
            bar,
            Bar {
                first_field: 1,
                second_field: Slug("this-is-my-foo".to_string()),
            }
        );
    }

    #[test]
    fn missing_source_field_fails() {
        let result: Result<Bar, _> = convert(
            foo(),
            converters![FieldMap::<Bar, Foo>::new([("first_field", "missing")])],
        );
        assert!(matches!(result, Err(ConvertError::FieldNotFound(_))));
    }

    #[test]
    fn missing_target_field_fails() {
        let result: Result<Bar, _> = convert(
            foo(),
            converters![FieldMap::<Bar, Foo>::new([("nope", "first")])],
        );
        assert!(matches!(result, Err(ConvertError::FieldNotFound(_))));
    }

    #[test]
    fn user_errors_propagate_verbatim() {
        let result: Result<Bar, _> = convert(
            foo(),
            converters![
                ConvertFn::<Slug, String>::new(|_| Err(ConvertError::custom("slug failed"))),
                FieldMap::<Bar, Foo>::new([
                    ("first_field", "first"),
                    ("second_field", "second"),
                ]),
            ],
        );
        assert_eq!(result, Err(ConvertError::Custom("slug failed".to_string())));
    }
}

mod tree_test {
    use pretty_assertions::assert_eq;
    use remold::{
        convert, converters, impl_newtype, impl_record, ConvertError, ConvertFn, FieldMap,
        RecursiveFn, Resolver, TypeDescriptor, Value,
    };

    // first tree structure: an abstract node is either a leaf carrying a
    // number or a branch holding two abstract children

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct TreeLeaf(i64);

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct TreeBranch {
        left: Value,
        right: Value,
    }

    // second tree structure

    #[derive(Clone, Debug, Default, PartialEq, Hash)]
    struct TreeNode {
        value: i64,
        left: Option<Box<TreeNode>>,
        right: Option<Box<TreeNode>>,
    }

    impl_newtype! {
        TreeLeaf
    }

    impl_record! {
        TreeBranch { left: Value, right: Value }
        TreeNode {
            value: i64,
            left: Option<Box<TreeNode>>,
            right: Option<Box<TreeNode>>
        }
    }

    fn node(value: impl Into<Value>) -> Value {
        Value::tagged(TypeDescriptor::Abstract("Node".to_string()), value)
    }

    fn source_tree() -> TreeBranch {
        TreeBranch {
            left: node(TreeBranch {
                left: node(TreeLeaf(1)),
                right: node(TreeLeaf(2)),
            }),
            right: node(TreeBranch {
                left: node(TreeLeaf(3)),
                right: node(TreeBranch {
                    left: node(TreeLeaf(4)),
                    right: node(TreeLeaf(5)),
                }),
            }),
        }
    }

    fn leaf(value: i64) -> Box<TreeNode> {
        Box::new(TreeNode {
            value,
            ..Default::default()
        })
    }

    fn branch(left: Box<TreeNode>, right: Box<TreeNode>) -> Box<TreeNode> {
        Box::new(TreeNode {
            value: 0,
            left: Some(left),
            right: Some(right),
        })
    }

    fn expected_tree() -> Box<TreeNode> {
        branch(
            branch(leaf(1), leaf(2)),
            branch(leaf(3), branch(leaf(4), leaf(5))),
        )
    }

    fn convert_node(cnv: &Resolver, n: Value) -> Result<Box<TreeNode>, ConvertError> {
        if let Some(leaf) = n.downcast_ref::<TreeLeaf>() {
            return Ok(Box::new(TreeNode {
                value: leaf.0,
                ..Default::default()
            }));
        }
        if let Some(branch) = n.downcast_ref::<TreeBranch>() {
            let left: Box<TreeNode> = cnv.convert(branch.left.clone())?;
            let right: Box<TreeNode> = cnv.convert(branch.right.clone())?;
            return Ok(Box::new(TreeNode {
                value: 0,
                left: Some(left),
                right: Some(right),
            }));
        }
        Err(ConvertError::custom(format!("unknown node shape: {n}")))
    }

    #[test]
    fn generic_recursive_conversion_works() {
        let actual: Box<TreeNode> = convert(
            source_tree(),
            converters![RecursiveFn::<Box<TreeNode>, Value>::new(convert_node)
                .from_source(TypeDescriptor::Abstract("Node".to_string()))],
        )
        .unwrap();
        assert_eq!(actual, expected_tree());
    }

    #[test]
    fn specialized_recursive_conversion_works() {
        let actual: Box<TreeNode> = convert(
            source_tree(),
            converters![
                ConvertFn::<Box<TreeNode>, TreeLeaf>::new(|leaf| {
                    Ok(Box::new(TreeNode {
                        value: leaf.0,
                        ..Default::default()
                    }))
                }),
                RecursiveFn::<Box<TreeNode>, TreeBranch>::new(|cnv, branch| {
                    let left: Box<TreeNode> = cnv.convert(branch.left)?;
                    let right: Box<TreeNode> = cnv.convert(branch.right)?;
                    Ok(Box::new(TreeNode {
                        value: 0,
                        left: Some(left),
                        right: Some(right),
                    }))
                }),
            ],
        )
        .unwrap();
        assert_eq!(actual, expected_tree());
    }

    #[test]
    fn field_mapping_recursive_conversion_works() {
        let actual: Box<TreeNode> = convert(
            source_tree(),
            converters![
                FieldMap::<TreeNode, TreeBranch>::new([("left", "left"), ("right", "right")])
                    .by_ref(),
                ConvertFn::<Box<TreeNode>, TreeLeaf>::new(|leaf| {
                    Ok(Box::new(TreeNode {
                        value: leaf.0,
                        ..Default::default()
                    }))
                }),
            ],
        )
        .unwrap();
        assert_eq!(actual, expected_tree());
    }
}
