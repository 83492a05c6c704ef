/*!
 * Full app lifecycle tests: load a novel file, analyze it, write outputs
 */

use cineplan::app_config::Config;
use cineplan::app_controller::Controller;

use crate::common;

const OUTPUT_FILES: [&str; 6] = [
    "scenes.json",
    "image_prompts.json",
    "narration.json",
    "sfx_cues.json",
    "characters.json",
    "config.json",
];

/// Controller run writes all six plan files
#[tokio::test]
async fn test_controller_run_withNovelFile_shouldWriteAllOutputs() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(
        &dir,
        "novel.txt",
        "Elena reached the castle gates at dusk.\n\n\n\"Open up,\" she called into the storm.",
    )
    .unwrap();
    let output_dir = dir.join("plan");

    let controller = Controller::with_config(Config::default()).unwrap();
    controller.run(input, output_dir.clone(), false).await.unwrap();

    for name in OUTPUT_FILES {
        let path = output_dir.join(name);
        assert!(path.is_file(), "missing {name}");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }

    let scenes: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_dir.join("scenes.json")).unwrap())
            .unwrap();
    assert_eq!(scenes.as_array().unwrap().len(), 2);
}

/// Existing outputs are not overwritten without the force flag
#[tokio::test]
async fn test_controller_run_withExistingOutputs_shouldSkipUnlessForced() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "novel.txt", "A short tale.").unwrap();
    let output_dir = dir.join("plan");

    std::fs::create_dir_all(&output_dir).unwrap();
    std::fs::write(output_dir.join("scenes.json"), "sentinel").unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();

    controller
        .run(input.clone(), output_dir.clone(), false)
        .await
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(output_dir.join("scenes.json")).unwrap(),
        "sentinel"
    );

    controller.run(input, output_dir.clone(), true).await.unwrap();
    assert_ne!(
        std::fs::read_to_string(output_dir.join("scenes.json")).unwrap(),
        "sentinel"
    );
}

/// Unsupported input formats surface as errors
#[tokio::test]
async fn test_controller_run_withUnsupportedInput_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "novel.docx", "binaryish").unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let result = controller.run(input, dir.join("plan"), false).await;

    assert!(result.is_err());
}
