fn main() {
    campaign_genie::app::cli::run();
}
