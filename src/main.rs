use std::process;

use log::error;

fn main() {
    env_logger::init();

    match point_driver::driver() {
        Ok(_) => {}
        Err(e) => {
            error!("{:?}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
