fn main() -> anyhow::Result<()> {
    stroke_cards_cli::run()
}
