use log::LevelFilter;

pub struct Logger;

impl Logger {
    pub fn init(verbosity: LevelFilter) {
        let mut builder: env_logger::Builder = colog::basic_builder();
        builder.filter_level(verbosity);
        builder.init();
    }
}
