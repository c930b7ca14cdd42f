use avl_ordered_tree::{AvlTree, TreeOps};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::time::Instant;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, value_enum, default_value_t = TreeKind::Avl)]
    tree: TreeKind,

    /// Order in which values are inserted and removed
    #[arg(long, value_enum, default_value_t = Order::Ascending)]
    order: Order,

    /// Seed for the shuffled order
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TreeKind {
    Avl,
    Btree,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Debug, Error)]
enum BenchError {
    #[error("expected {expected} values in the tree, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("value {0} missing after insertion")]
    Missing(usize),
    #[error("value {0} could not be removed")]
    NotRemoved(usize),
}

fn values(args: &Args) -> Vec<usize> {
    let mut values: Vec<usize> = (0..args.size).collect();
    match args.order {
        Order::Ascending => {}
        Order::Descending => values.reverse(),
        Order::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            values.shuffle(&mut rng);
        }
    }
    values
}

fn check_len<T: TreeOps<usize>>(tree: &T, expected: usize) -> Result<(), BenchError> {
    let actual = tree.len();
    if actual != expected {
        return Err(BenchError::SizeMismatch { expected, actual });
    }
    Ok(())
}

fn run<T: TreeOps<usize>>(mut tree: T, values: &[usize]) -> Result<(), BenchError> {
    let start = Instant::now();
    for (i, &value) in values.iter().enumerate() {
        check_len(&tree, i)?;
        tree.insert(value);
        if !tree.contains(&value) {
            return Err(BenchError::Missing(value));
        }
    }
    let inserted = Instant::now();
    info!("inserted {} values", values.len());

    for &value in values {
        if !tree.contains(&value) {
            return Err(BenchError::Missing(value));
        }
    }
    let checked_contains = Instant::now();
    info!("checked contains for {} values", values.len());

    for &value in values {
        if !tree.remove(&value) {
            return Err(BenchError::NotRemoved(value));
        }
    }
    check_len(&tree, 0)?;
    let end = Instant::now();
    info!("removed {} values", values.len());

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
    Ok(())
}

fn main() -> Result<(), BenchError> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Running with {:?} tree, {} node count and {:?} order",
        args.tree, args.size, args.order
    );

    let values = values(&args);
    match args.tree {
        TreeKind::Avl => run(AvlTree::new(), &values),
        TreeKind::Btree => run(BTreeSet::new(), &values),
    }
}
