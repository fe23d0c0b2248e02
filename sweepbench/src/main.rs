fn main() -> anyhow::Result<()> {
    sweepbench::run()
}
