//! Example that demonstrates the usage shown in the package documentation.
//!
//! This shows how to use the `cpuset` package for parsing and emitting processor lists.

use cpuset::CpuSet;

fn main() {
    println!("=== cpuset README Example ===");

    let selected_processors = cpuset::parse("0-3,7,9-11").unwrap();
    assert_eq!(selected_processors, vec![0, 1, 2, 3, 7, 9, 10, 11]);

    println!("Selected processors: {selected_processors:?}");
    println!("As cpuset: {}", cpuset::unparse(selected_processors));

    let reserved: CpuSet = "1,0".parse().unwrap();
    println!("Reserved processors: {reserved}");

    println!("README example completed successfully!");
}
