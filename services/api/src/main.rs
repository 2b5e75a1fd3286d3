use sales_visit_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("sales-visit: {err}");
        std::process::exit(1);
    }
}
