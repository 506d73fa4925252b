//! Parse and print a small Newick tree.
//!
//! Run with: cargo run -p cardiohub-seq --example parse_tree

use cardiohub_seq::parse_newick;

fn main() -> anyhow::Result<()> {
    let tree = parse_newick("(A, (B, C), (D, E));")?;
    println!("{} nodes, {} leaves", tree.node_count(), tree.leaf_count());
    print!("{}", tree.to_ascii());
    Ok(())
}
