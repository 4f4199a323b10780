mod shell;

fn main() -> anyhow::Result<()> {
    // Single optional argument: the backend base URL.
    let base_url = std::env::args().nth(1);
    shell::run_app(base_url)
}
