mod command;
mod provider;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
