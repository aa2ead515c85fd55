use std::fs;
use std::path::PathBuf;

use include_graph::graph::DependencyGraph;
use include_graph::scanner::{ScanOptions, Scanner};
use regex::Regex;

fn make_temp_tree(entries: Vec<(&str, &str)>) -> PathBuf {
    let base = std::env::temp_dir().join(format!(
        "include_graph_scan_{}_{}",
        std::process::id(),
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_nanos()
    ));
    fs::create_dir_all(&base).unwrap();
    for (rel, body) in entries {
        let p = base.join(rel);
        if let Some(par) = p.parent() {
            fs::create_dir_all(par).unwrap();
        }
        fs::write(p, body).unwrap();
    }
    base
}

#[test]
fn basic_tree_produces_expected_nodes_and_edges() {
    let root = make_temp_tree(vec![
        ("a.c", "#include \"b.h\"\n#include <stdio.h>\n\nint main(void) { return 0; }\n"),
        ("b.h", "/* no includes */\n"),
    ]);

    let map = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");
    let graph = DependencyGraph::from_include_map(&map);

    assert_eq!(graph.nodes, vec!["a.c".to_string(), "b.h".to_string()]);
    assert_eq!(
        graph.edges,
        vec![
            ("a.c".to_string(), "b.h".to_string()),
            ("a.c".to_string(), "stdio.h".to_string()),
        ]
    );
}

#[test]
fn nosysinc_suppresses_standard_headers_only() {
    let root = make_temp_tree(vec![
        ("a.c", "#include \"b.h\"\n#include <stdio.h>\n"),
        ("b.h", ""),
    ]);

    let opts = ScanOptions { suppress_system: true, ..ScanOptions::default() };
    let map = Scanner::new(opts).walk(&root).expect("scan");
    let graph = DependencyGraph::from_include_map(&map);

    assert_eq!(graph.edges, vec![("a.c".to_string(), "b.h".to_string())]);
}

#[test]
fn quote_and_angle_forms_share_edge_identity() {
    let root = make_temp_tree(vec![
        ("one.c", "#include \"foo.h\"\n"),
        ("two.c", "#include <foo.h>\n"),
    ]);

    let map = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");
    let graph = DependencyGraph::from_include_map(&map);

    let targets: Vec<&str> = graph.edges.iter().map(|(_, to)| to.as_str()).collect();
    assert_eq!(targets, vec!["foo.h", "foo.h"]);
}

#[test]
fn excluded_file_contributes_nothing_but_edges_to_it_remain() {
    let root = make_temp_tree(vec![
        ("test/skip.c", "#include \"x.h\"\n"),
        ("main.c", "#include \"skip.c\"\n"),
    ]);

    let opts =
        ScanOptions { excludes: vec![Regex::new("test/").unwrap()], ..ScanOptions::default() };
    let map = Scanner::new(opts).walk(&root).expect("scan");
    let graph = DependencyGraph::from_include_map(&map);

    // skip.c: no node, no outgoing edge; the edge into it survives because
    // edge creation does not verify the target was scanned
    assert_eq!(graph.nodes, vec!["main.c".to_string()]);
    assert_eq!(graph.edges, vec![("main.c".to_string(), "skip.c".to_string())]);
}

#[test]
fn per_file_include_order_is_top_to_bottom() {
    let root = make_temp_tree(vec![(
        "main.c",
        "#include \"z.h\"\n#include \"m.h\"\n#include \"a.h\"\n",
    )]);

    let map = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");
    assert_eq!(
        map.entries["main.c"],
        vec!["z.h".to_string(), "m.h".to_string(), "a.h".to_string()]
    );
}

#[test]
fn rescan_of_unchanged_tree_is_idempotent() {
    let root = make_temp_tree(vec![
        ("a.c", "#include \"b.h\"\n#include <stdio.h>\n"),
        ("sub/b.h", "#include <string.h>\n"),
        ("sub/c.h", ""),
    ]);

    let first = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");
    let second = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");

    let g1 = DependencyGraph::from_include_map(&first);
    let g2 = DependencyGraph::from_include_map(&second);
    assert_eq!(g1.nodes, g2.nodes);

    let mut e1 = g1.edges.clone();
    let mut e2 = g2.edges.clone();
    e1.sort();
    e2.sort();
    assert_eq!(e1, e2);

    // per-file lists are order-sensitive
    for (file, includes) in &first.entries {
        assert_eq!(Some(includes), second.entries.get(file));
    }
}

#[test]
fn binary_content_does_not_abort_the_scan() {
    let root = make_temp_tree(vec![("a.c", "#include \"b.h\"\n")]);
    // a qualifying file with non-UTF8 bytes interleaved with a directive
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x00, 0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"#include <stdint.h>\n");
    fs::write(root.join("blob.h"), bytes).unwrap();

    let map = Scanner::new(ScanOptions::default()).walk(&root).expect("scan");
    assert_eq!(map.entries["blob.h"], vec!["stdint.h".to_string()]);
}
