//! The interactive menu driver around [`bst_demo::tree::Tree`]. Reads numbered menu
//! choices from stdin and narrates inserts as they walk the tree.

use std::io::{self, BufRead, Write};

use bst_demo::tree::Tree;

const MENU: &str = "\n1. Add Node\n2. Remove Node\n3. Display Tree\n4. Find Maximum\n5. Run Performance Test\n6. Exit\nEnter your choice: ";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut tree = Tree::new();

    loop {
        print!("{}", MENU);
        io::stdout().flush()?;

        let choice = match lines.next() {
            Some(line) => line?,
            // stdin closed; treat it like a quiet exit.
            None => return Ok(()),
        };
        match choice.trim() {
            "1" => {
                if let Some(value) = prompt_value(&mut lines, "Enter value to add: ")? {
                    tree.insert_traced(value, |event| println!("{}", event));
                }
            }
            "2" => {
                if let Some(value) = prompt_value(&mut lines, "Enter value to remove: ")? {
                    tree.remove(value);
                }
            }
            "3" => {
                println!("BST Structure:");
                print!("{}", tree);
            }
            "4" => {
                // -1 stands in for "empty tree" on this menu.
                println!("Maximum value in BST: {}", tree.max().unwrap_or(-1));
            }
            "5" => {
                for stage in tree.measure_insert_throughput(&mut rand::thread_rng()) {
                    println!(
                        "Added {} elements in {:.3} ms",
                        stage.inserted,
                        stage.elapsed.as_secs_f64() * 1_000.0
                    );
                }
            }
            "6" => {
                println!("Exiting program.");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Prompts for an integer on the next stdin line. Returns `None` (after telling the
/// user) when the line isn't a valid integer or stdin has closed.
fn prompt_value(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<Option<i32>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let line = match lines.next() {
        Some(line) => line?,
        None => return Ok(None),
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid value. Please enter an integer.");
            Ok(None)
        }
    }
}
