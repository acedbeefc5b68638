/*!
Loads the hellolib dynamic library from the target directory
(build it first with `cargo build -p hellolib_impl`),
mounts the version guard,and calls `greet`.

Pass `--fatal` to take the abrupt-termination path instead.
*/

use std::{env, path::Path, process};

use version_guard::library::{development_utils::compute_library_path, GuardedLibrary};

use hellolib_interface::Hellolib;

fn main() {
    let fatal = env::args().skip(1).any(|arg| arg == "--fatal");

    let target_dir: &Path = "../../../target".as_ref();
    let library_dir = compute_library_path::<Hellolib>(target_dir).unwrap_or_else(|e| {
        eprintln!("could not locate the hellolib binary:{}", e);
        process::exit(1);
    });

    let hellolib = Hellolib::load_in(&library_dir).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    println!(
        "loaded '{}' at:\n\t{}",
        Hellolib::NAME,
        Hellolib::get_library_path(&library_dir).display(),
    );
    println!("interface version: {}", Hellolib::VERSION_STRINGS);
    if let Some(guard) = Hellolib::mounted_guard() {
        println!("guards mounted over the counter: {}", guard.count());
    }
    println!();

    hellolib.greet(fatal);
}
