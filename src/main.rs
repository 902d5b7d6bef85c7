use aocgen::{
    cli::{get_args, init_logging, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    init_logging();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
