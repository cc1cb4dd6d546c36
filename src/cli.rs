use argparse::{ArgumentParser, Store};

pub struct CliArgs {
    pub base_url: String,
    pub page_size: usize,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            base_url: "https://sonik.space/api/transmitters".into(),
            page_size: 100,
            log_level: "essential".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Satellite transmitter API -> JSON summary report");
        ap.refer(&mut args.base_url)
            .add_option(&["--base-url"], Store, "Transmitter listing endpoint");
        ap.refer(&mut args.page_size)
            .add_option(&["--page-size"], Store, "Records requested per page");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
