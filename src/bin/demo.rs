//! Demonstration entry point: prints example groupings for both strategies.

use anagroup::prelude::*;

fn print_groups(label: &str, groups: &[Vec<&str>]) {
    println!("{label}:");
    for group in groups {
        println!("  {group:?}");
    }
}

fn main() -> Result<(), GroupError> {
    let words = vec!["eat", "tea", "tan", "ate", "nat", "bat"];
    print_groups("count-signature", &anagroup_owned(&words)?);
    print_groups("sorted-signature", &anagroup_sorted_owned(&words));

    print_groups("empty word", &anagroup_owned(&[""])?);
    print_groups("single word", &anagroup_owned(&["a"])?);

    Ok(())
}
