use lazy_static::lazy_static;

lazy_static! {
    static ref LOG: u64 = init_log();
}

// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    1
}

pub mod cluster;
pub mod plot;
