use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use hotsauce_server::{
    routes::LIVENESS_MESSAGE,
    sauce::{HotSauce, HotSauceChanges, NewHotSauce},
};
use reqwest::{Client, StatusCode};

/// Runs a create/read/update/delete pass against a live server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();
    let api = format!("{}/api/hotsauces", args.base_url.trim_end_matches('/'));

    let liveness = client.get(format!("{api}/test")).send().await?.text().await?;
    ensure!(liveness == LIVENESS_MESSAGE, "Unexpected liveness reply: {liveness}");
    println!("Server is up");

    let before: u64 = client.get(format!("{api}/count")).send().await?.json().await?;
    println!("Catalog holds {before} sauces");

    let new_sauce = NewHotSauce {
        brand_name: "Tester".to_string(),
        sauce_name: "Smoke Check".to_string(),
        description: "Created by the tester binary".to_string(),
        url: "https://example.com/smoke-check".to_string(),
        heat: 1_234,
    };
    let response = client.post(&api).json(&new_sauce).send().await?;
    ensure!(response.status() == StatusCode::CREATED, "Create returned {}", response.status());
    let created: HotSauce = response.json().await?;
    ensure!(created.id != 0, "Store did not assign an id");
    println!("Created sauce {}", created.id);

    let item = format!("{api}/{}", created.id);
    let fetched: HotSauce = client.get(&item).send().await?.json().await?;
    ensure!(fetched == created, "Fetched {fetched:?}, expected {created:?}");

    // Only heat is set, so the empty text fields must not overwrite anything.
    let changes = HotSauceChanges::from_defaults(HotSauce {
        heat: 4_321,
        ..Default::default()
    });
    let updated: HotSauce = client
        .put(&item)
        .json(&changes)
        .send()
        .await?
        .json()
        .await
        .context("Update did not return a sauce")?;
    ensure!(updated.heat == 4_321, "Heat not updated: {updated:?}");
    ensure!(updated.sauce_name == created.sauce_name, "Merge dropped a field: {updated:?}");
    println!("Updated sauce {}", created.id);

    let matches: Vec<HotSauce> = client
        .get(&api)
        .query(&[("brandNameFilter", "tESTER"), ("minHeat", "4321"), ("maxHeat", "4321")])
        .send()
        .await?
        .json()
        .await?;
    ensure!(
        matches.iter().any(|s| s.id == created.id),
        "Filtered list is missing sauce {}",
        created.id
    );

    let status = client.delete(&item).send().await?.status();
    ensure!(status == StatusCode::NO_CONTENT, "Delete returned {status}");

    match client.get(&item).send().await?.status() {
        StatusCode::NOT_FOUND => println!("Deleted sauce {}", created.id),
        other => bail!("Deleted sauce still answers with {other}"),
    }

    let after: u64 = client.get(format!("{api}/count")).send().await?.json().await?;
    ensure!(after == before, "Count drifted from {before} to {after}");

    println!("All checks passed");

    Ok(())
}
