use rstest::rstest;
use xmlq_query::simple_node::{SimpleNode, attr, doc, elem, text};
use xmlq_query::{
    IndexError, XmlNode, all_elements, index_by, index_by_attribute, narrow, nodes,
};

/// `<root><x a='1'/><y a='2'/><z a='3'/></root>` with sibling whitespace.
fn siblings() -> SimpleNode {
    elem("root")
        .child(text("\n   "))
        .child(elem("x").attr(attr("a", "1")))
        .child(text("\n   "))
        .child(elem("y").attr(attr("a", "2")))
        .child(text("\n   "))
        .child(elem("z").attr(attr("a", "3")))
        .child(text("\n"))
        .build()
}

#[rstest]
fn index_by_attribute_maps_value_to_element() {
    let map = index_by_attribute(nodes(siblings().children()), "a").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["1"].name().unwrap().local, "x");
    assert_eq!(map["2"].name().unwrap().local, "y");
    assert_eq!(map["3"].name().unwrap().local, "z");
}

#[rstest]
fn duplicated_attribute_value_is_a_collision() {
    let root = elem("root")
        .child(elem("x").attr(attr("a", "1")))
        .child(elem("y").attr(attr("a", "2")))
        .child(elem("z").attr(attr("a", "1")))
        .build();
    let err = index_by_attribute(nodes(root.children()), "a").unwrap_err();
    assert!(matches!(err, IndexError::DuplicateKey { .. }));
}

#[rstest]
fn indexes_the_output_of_whole_tree_enumeration() {
    let document = doc()
        .child(
            elem("root")
                .attr(attr("id", "r"))
                .child(elem("a").attr(attr("id", "1")))
                .child(elem("b").attr(attr("id", "2"))),
        )
        .build();
    let map = index_by_attribute(all_elements(&document), "id").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["r"].name().unwrap().local, "root");
}

#[rstest]
fn indexes_the_output_of_narrowing() {
    let root = elem("root")
        .child(elem("group").child(elem("item").attr(attr("id", "a"))))
        .child(elem("group").child(elem("item").attr(attr("id", "b"))))
        .build();
    let map = index_by_attribute(narrow(&root, &["group", "item"]), "id").unwrap();
    assert_eq!(map.len(), 2);
}

#[rstest]
fn custom_key_rules_may_collide_too() {
    let err = index_by(nodes(siblings().children()), |_| "same").unwrap_err();
    assert_eq!(err, IndexError::DuplicateKey { key: "\"same\"".into() });
}
