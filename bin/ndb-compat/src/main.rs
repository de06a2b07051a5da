// bin/ndb-compat/src/main.rs

fn main() {
    let code = ndb_compat_cli::main_with_args(std::env::args_os());
    std::process::exit(code);
}
