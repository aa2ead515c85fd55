use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use include_graph::scanner::{ScanOptions, Scanner};
use std::fs;
use std::path::PathBuf;

// Synthetic C tree: `dirs` directories each holding `files` sources that
// include a shared header plus a per-file header.
fn make_synthetic_tree(dirs: usize, files: usize) -> PathBuf {
    let base = std::env::temp_dir().join(format!("include_graph_bench_{}", std::process::id()));
    let _ = fs::remove_dir_all(&base);
    for d in 0..dirs {
        let dir = base.join(format!("mod{d}"));
        fs::create_dir_all(&dir).expect("create bench dir");
        for f in 0..files {
            let body = format!("#include \"common.h\"\n#include <stdio.h>\n#include \"local{f}.h\"\nint f{f}(void);\n");
            fs::write(dir.join(format!("file{f}.c")), body).expect("write bench file");
            fs::write(dir.join(format!("local{f}.h")), "#include <stddef.h>\n")
                .expect("write bench header");
        }
    }
    fs::write(base.join("common.h"), "#include <stdint.h>\n").expect("write common header");
    base
}

fn bench_scan_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_tree");

    for (dirs, files) in [(4, 8), (16, 16)] {
        let root = make_synthetic_tree(dirs, files);
        group.bench_function(BenchmarkId::new("walk", format!("{dirs}x{files}")), |b| {
            b.iter(|| {
                let scanner = Scanner::new(ScanOptions::default());
                let map = scanner.walk(black_box(&root)).expect("scan");
                // prevent optimizer from discarding
                black_box(map.entries.len())
            })
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_scan_tree);
criterion_main!(benches);
