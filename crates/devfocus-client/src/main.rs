fn main() -> anyhow::Result<()> {
    devfocus_client_lib::run()
}
