use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::api::{self, AskOptions, CampaignOutcome, RenderedPost};
use crate::domain::{AppError, CampaignBrief, CancellationToken, EventRecord, GenieConfig};
use crate::ports::GeneratedImage;

/// Rows shown in the events table.
const EVENTS_TABLE_ROWS: usize = 20;

pub fn run_ask(
    config: GenieConfig,
    brief: CampaignBrief,
    include_posts: bool,
    include_images: bool,
    out_dir: &Path,
) -> Result<(), AppError> {
    let options =
        AskOptions { brief, include_posts, include_images, today: Local::now().date_naive() };

    eprintln!("🧞 Building {} campaign...", options.brief.brand());
    let outcome = api::ask(config, &options, &CancellationToken::new())?;

    print_outcome(&outcome, out_dir)
}

fn print_outcome(outcome: &CampaignOutcome, out_dir: &Path) -> Result<(), AppError> {
    let brand = outcome.campaign.brief.brand();

    println!("## Brand Platform for {}\n", brand);
    println!("{}\n", outcome.campaign.text.trim());

    if let Some(recommendation) = &outcome.events {
        println!("## Event recommendations for {} in {}\n", brand, recommendation.city);
        println!("{}\n", recommendation.text.trim());
        print_events_table(&recommendation.ranked);
    }

    if let Some(posts) = &outcome.posts {
        println!("## Instagram posts\n");
        for (index, rendered) in posts.iter().enumerate() {
            println!("### Post {}", index + 1);
            println!("{}", rendered.post.caption);
            println!("> {}", rendered.post.image_description);
            if let Some(location) = save_image(rendered, index + 1, out_dir)? {
                println!("🖼  {}", location);
            }
            println!();
        }
    }

    Ok(())
}

fn print_events_table(ranked: &[EventRecord]) {
    if ranked.is_empty() {
        println!("No events found.\n");
        return;
    }

    println!("| category | title | attendance | end |");
    println!("| --- | --- | --- | --- |");
    for event in ranked.iter().take(EVENTS_TABLE_ROWS) {
        println!(
            "| {} | {} | {} | {} |",
            event.category, event.title, event.attendance_score, event.end_date
        );
    }
    println!();
}

/// Write an inline image as `post-NN.<ext>`, returning where it can be found.
fn save_image(
    rendered: &RenderedPost,
    number: usize,
    out_dir: &Path,
) -> Result<Option<String>, AppError> {
    match &rendered.image {
        None => Ok(None),
        Some(GeneratedImage::Url(url)) => Ok(Some(url.to_string())),
        Some(image @ GeneratedImage::Bytes { data, .. }) => {
            fs::create_dir_all(out_dir)?;
            let path: PathBuf = out_dir.join(image_file_name(number, image.extension()));
            fs::write(&path, data)?;
            Ok(Some(path.display().to_string()))
        }
    }
}

fn image_file_name(number: usize, extension: &str) -> String {
    format!("post-{:02}.{}", number, extension)
}
