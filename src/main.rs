use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treecables::cables::{self, Connection};
use treecables::{balanced, find_min, sum_keys, unbalanced, SearchTree};

#[derive(Parser, Debug)]
#[command(
    name = "treecables",
    about = "Build a plain and a balanced BST, query them, then join cables at minimum cost"
)]
struct Cli {
    /// Keys inserted, in order, into the unbalanced tree.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = vec![10, 5, 1, 7, 40, 50]
    )]
    bst_keys: Vec<i64>,

    /// Keys inserted, in order, into the AVL tree.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = vec![10, 20, 30, 40, 50, 25]
    )]
    avl_keys: Vec<i64>,

    /// Cable lengths to join into one.
    #[arg(long, value_delimiter = ',', default_values_t = vec![8, 4, 6, 12])]
    lengths: Vec<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("=== Trees ===");
    let bst: unbalanced::Tree = cli.bst_keys.iter().copied().collect();
    print_tree("BST", &bst, bst.iter());

    let avl: balanced::Tree = cli.avl_keys.iter().copied().collect();
    print_tree("AVL", &avl, avl.iter());
    println!("AVL height: {}", avl.height());

    println!();
    println!("=== Cables ===");
    let connection = cables::connect(&cli.lengths)
        .with_context(|| format!("failed to join cables {:?}", cli.lengths))?;
    print_connection(&cli.lengths, &connection);

    Ok(())
}

fn print_tree(name: &str, tree: &impl SearchTree, keys: impl Iterator<Item = i64>) {
    match find_min(tree) {
        Some(min) => println!("{name} min: {min}"),
        None => println!("{name} min: (empty)"),
    }
    println!("{name} sum: {}", sum_keys(tree));
    println!("{name} keys: {:?}", keys.collect::<Vec<_>>());
}

fn print_connection(lengths: &[u64], connection: &Connection) {
    println!("Lengths: {lengths:?}");
    println!("Total minimal cost: {}", connection.total_cost);

    let merges: Vec<String> = connection.merges.iter().map(ToString::to_string).collect();
    println!("Merge order (a, b, cost): [{}]", merges.join(", "));
}
