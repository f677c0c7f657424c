use molecules::server::{self, AppState};
use serde_json::{json, Value};
use std::path::PathBuf;

async fn spawn(models_dir: PathBuf) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, AppState::new(models_dir)));
    format!("http://{addr}")
}

fn models_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("molecules-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn act(client: &reqwest::Client, base: &str, action: Value) -> reqwest::Response {
    client.post(format!("{base}/api/action")).json(&action).send().await.unwrap()
}

#[tokio::test]
async fn index_serves_page_and_resets_session() {
    let base = spawn(models_dir("index")).await;
    let client = reqwest::Client::new();

    act(&client, &base, json!({"type": "select_molecule", "id": "caffeine"})).await;
    let page = client.get(format!("{base}/")).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("<model-viewer id=\"viewerA\""));

    let state: Value = client.get(format!("{base}/api/state")).send().await.unwrap().json().await.unwrap();
    assert_eq!(state["selected"], "dna");
    assert_eq!(state["slots"][0]["title"], "Molecule A");
}

#[tokio::test]
async fn every_page_load_counts_as_a_new_session() {
    let state = AppState::new(models_dir("sessions"));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(server::serve(listener, state.clone()));
    let client = reqwest::Client::new();

    assert_eq!(state.sessions(), 0);
    client.get(format!("{base}/")).send().await.unwrap();
    act(&client, &base, json!({"type": "select_molecule", "id": "glucose"})).await;
    client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(state.sessions(), 2);

    let snapshot: Value = client.get(format!("{base}/api/state")).send().await.unwrap().json().await.unwrap();
    assert!(snapshot["slots"][0]["molecule"].is_null());
}

#[tokio::test]
async fn actions_round_trip_snapshot_and_commands() {
    let base = spawn(models_dir("actions")).await;
    let client = reqwest::Client::new();

    act(&client, &base, json!({"type": "select_molecule", "id": "dna"})).await;
    let res = act(&client, &base, json!({"type": "key", "key": "3"})).await;
    assert!(res.status().is_success());
    let body: Value = res.json().await.unwrap();

    assert_eq!(body["commands"][0]["type"], "load");
    assert_eq!(body["commands"][0]["viewer"], "b");
    assert_eq!(body["commands"][0]["model"], "/models/caffeine.glb");
    let table = &body["snapshot"]["table"];
    assert_eq!(table["headers"], json!(["DNA Helix", "Caffeine"]));
    assert_eq!(table["rows"][0]["values"], json!(["~2 trillion Da (human genome)", "194.19 Da"]));

    let body: Value = act(&client, &base, json!({"type": "set_view", "view": "single"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["snapshot"]["detail"]["title"], "Caffeine");
    assert!(body["snapshot"]["table"].is_null());
}

#[tokio::test]
async fn unknown_molecule_is_unprocessable() {
    let base = spawn(models_dir("unknown")).await;
    let client = reqwest::Client::new();
    let res = act(&client, &base, json!({"type": "select_molecule", "id": "water"})).await;
    assert_eq!(res.status().as_u16(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unknown molecule: water");
}

#[tokio::test]
async fn molecules_listed_in_selector_order() {
    let base = spawn(models_dir("list")).await;
    let list: Value = reqwest::get(format!("{base}/api/molecules")).await.unwrap().json().await.unwrap();
    let ids: Vec<&str> = list.as_array().unwrap().iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["dna", "hemoglobin", "glucose", "caffeine"]);
    assert_eq!(list[2]["properties"]["type"], "Monosaccharide");
}

#[tokio::test]
async fn model_files_are_served_from_models_dir() {
    let dir = models_dir("models");
    std::fs::write(dir.join("dna.glb"), b"glTF-fake").unwrap();
    let base = spawn(dir).await;

    let res = reqwest::get(format!("{base}/models/dna.glb")).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(res.headers()["content-type"], "model/gltf-binary");
    assert_eq!(&res.bytes().await.unwrap()[..], b"glTF-fake");

    let missing = reqwest::get(format!("{base}/models/glucose.glb")).await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let bad = reqwest::get(format!("{base}/models/notes.txt")).await.unwrap();
    assert_eq!(bad.status().as_u16(), 400);
}
