//! gen → sort → check round-trips on temporary files.

use oesort_cli::{check, gen, sort};
use sliceio::SliceFile;

fn gen_args(count: usize, seed: u64, path: &std::path::Path) -> gen::GenArgs {
    gen::GenArgs {
        count,
        seed,
        path: path.to_path_buf(),
    }
}

fn sort_args(count: usize, nodes: usize, input: &std::path::Path, output: &std::path::Path) -> sort::SortArgs {
    sort::SortArgs {
        count,
        nodes: Some(nodes),
        reduce: sort::Reduce::Flat,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
    }
}

#[test]
fn gen_sort_check_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    for nodes in [1, 2, 5] {
        gen::run(gen_args(1000, 7, &input)).unwrap();
        sort::run(sort_args(1000, nodes, &input, &output)).unwrap();
        check::run(check::CheckArgs {
            against: Some(input.clone()),
            path: output.clone(),
        })
        .unwrap();
    }
}

#[test]
fn tree_reduction_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    gen::run(gen_args(640, 3, &input)).unwrap();
    let mut args = sort_args(640, 4, &input, &output);
    args.reduce = sort::Reduce::Tree;
    sort::run(args).unwrap();
    check::run(check::CheckArgs {
        against: Some(input.clone()),
        path: output,
    })
    .unwrap();
}

#[test]
fn more_nodes_than_elements() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tiny.bin");
    let output = dir.path().join("tiny-sorted.bin");

    SliceFile::create(&input, 3)
        .unwrap()
        .write_slice(0, &[3.0, 1.0, 2.0])
        .unwrap();
    sort::run(sort_args(3, 5, &input, &output)).unwrap();
    assert_eq!(
        SliceFile::open(&output).unwrap().read_slice(0, 3).unwrap(),
        vec![1.0, 2.0, 3.0]
    );
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    let output = dir.path().join("empty-sorted.bin");

    gen::run(gen_args(0, 0, &input)).unwrap();
    sort::run(sort_args(0, 3, &input, &output)).unwrap();
    assert_eq!(
        SliceFile::open(&output).unwrap().element_count().unwrap(),
        0
    );
}

#[test]
fn undersized_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.bin");
    let output = dir.path().join("out.bin");

    gen::run(gen_args(10, 0, &input)).unwrap();
    let err = sort::run(sort_args(100, 2, &input, &output)).unwrap_err();
    assert!(err.to_string().contains("10 elements"));
}

#[test]
fn zero_nodes_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    gen::run(gen_args(4, 0, &input)).unwrap();

    let mut args = sort_args(4, 1, &input, &dir.path().join("out.bin"));
    args.nodes = Some(0);
    assert!(sort::run(args).is_err());
}

#[test]
fn check_rejects_unsorted_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unsorted.bin");
    SliceFile::create(&path, 3)
        .unwrap()
        .write_slice(0, &[2.0, 1.0, 3.0])
        .unwrap();

    let err = check::run(check::CheckArgs {
        against: None,
        path,
    })
    .unwrap_err();
    assert!(err.to_string().contains("not sorted"));
}

#[test]
fn check_rejects_dropped_elements() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let fake = dir.path().join("fake.bin");
    SliceFile::create(&input, 3)
        .unwrap()
        .write_slice(0, &[3.0, 1.0, 2.0])
        .unwrap();
    // Sorted, same length, but not the same multiset.
    SliceFile::create(&fake, 3)
        .unwrap()
        .write_slice(0, &[1.0, 2.0, 4.0])
        .unwrap();

    let err = check::run(check::CheckArgs {
        against: Some(input),
        path: fake,
    })
    .unwrap_err();
    assert!(err.to_string().contains("not a permutation"));
}
