use xsdroo_cli::XsdrooCli;

fn main() -> anyhow::Result<()> {
    XsdrooCli::new().parse_and_run()
}
