fn main() {
    if let Err(e) = rtscope_cli::run() {
        match e.downcast_ref::<clap::Error>() {
            // clap renders its own usage message.
            Some(usage) => {
                let _ = usage.print();
            }
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
