use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use avltree::{keys, render, AvlTree};

#[derive(Parser, Debug)]
#[command(name = "avltree", about = "Fill an AVL tree with random keys and report on it")]
struct Cli {
    /// Number of keys to generate.
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Smallest key that may be generated.
    #[arg(long, default_value_t = 1)]
    min: i64,
    /// Largest key that may be generated.
    #[arg(long, default_value_t = 1000)]
    max: i64,
    /// Seed for the key generator (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Write the tree as a Graphviz file.
    #[arg(long)]
    dot: Option<PathBuf>,
    /// Print the tree as an indented outline.
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let keys = keys::random_keys(&mut rng, cli.count, cli.min, cli.max)
        .context("failed to generate keys")?;
    println!("Generated keys:\n{}", join(&keys));

    let mut tree = AvlTree::new();
    for &key in &keys {
        tree.insert(key);
    }
    info!(
        generated = keys.len(),
        distinct = tree.len(),
        height = tree.height(),
        "tree built"
    );

    println!("\nPre-order traversal:\n{}", join(tree.pre_order()));
    println!("\nIn-order traversal:\n{}", join(tree.in_order()));
    println!("\nPost-order traversal:\n{}", join(tree.post_order()));

    println!("\nLargest key: {}", display_opt(tree.find_max()));
    println!("Smallest key: {}", display_opt(tree.find_min()));
    println!("Sum of keys: {}", tree.sum_values());

    if cli.outline {
        print!("\n{}", render::to_outline(tree.root()));
    }

    if let Some(path) = cli.dot {
        fs::write(&path, render::to_dot(tree.root()))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote graphviz file");
    }

    Ok(())
}

fn join<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_opt(key: Option<&i64>) -> String {
    key.map_or_else(|| String::from("none"), i64::to_string)
}
