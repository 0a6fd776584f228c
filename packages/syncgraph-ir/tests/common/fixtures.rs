//! Test fixture generators
//!
//! C sources written against the AutoSync API.

use std::path::PathBuf;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// FFT-style program: one worker thread created in a loop, a helper, five
/// intentions records and an event wait
pub fn fixture_fft_pipeline() -> String {
    include_str!("../fixtures/fft_pipeline.c").to_string()
}

/// The FFT program with a helper that writes `x` under a second intention
pub fn fixture_fft_pipeline_conflicting() -> String {
    fixture_fft_pipeline().replace(
        "iAutoSyncWrite(&x, &localX, sizeof(x), xIntentionX);",
        "iAutoSyncWrite(&x, &localX, sizeof(x), xNoSpecialIntention);",
    )
}

/// `int shared;` read and written in `T1` under `intention` (declared without
/// initializer); `main` writes it under `main_intention` when given
pub fn fixture_shared_counter(intention: &str, main_intention: Option<&str>) -> String {
    let main_access = main_intention
        .map(|token| format!("  iAutoSyncWrite(&shared, &tmp, sizeof(tmp), {token});\n"))
        .unwrap_or_default();

    format!(
        r#"int shared;
xAutoSyncIntentions {intention};

void *T1(void *args)
{{
  int tmp;
  iAutoSyncRead(&tmp, &shared, sizeof(tmp), {intention});
  tmp++;
  iAutoSyncWrite(&shared, &tmp, sizeof(tmp), {intention});
  return NULL;
}}

int main(void)
{{
  pthread_t t;
  int tmp = 0;
  pthread_create(&t, NULL, &T1, NULL);
{main_access}  return 0;
}}
"#
    )
}

/// Thread `Worker` created once, either at top level or inside one loop
pub fn fixture_worker_creation(in_loop: bool) -> String {
    let create = "pthread_create(&t, NULL, &Worker, NULL);";
    let body = if in_loop {
        format!("  for (i = 0; i < 4; i++) {{\n    {create}\n  }}\n")
    } else {
        format!("  {create}\n")
    };

    format!(
        "int counter;\n\nvoid *Worker(void *args)\n{{\n  int local;\n  iAutoSyncUpdate(&counter, &local, sizeof(local), xCounter);\n  return NULL;\n}}\n\nint main(void)\n{{\n  pthread_t t;\n  int i;\n{body}  return 0;\n}}\n"
    )
}

/// Accessor calls without the intention argument (older AutoSync API)
pub fn fixture_legacy_three_argument_call() -> String {
    r#"uint32_t uiCountOccurrences = 0;

void *SearchThread(void *args)
{
  uint32_t uiCountLocal;
  iAutoSyncReadToUpdate(&uiCountLocal, &uiCountOccurrences, sizeof(uiCountLocal));
  return NULL;
}

int main(void)
{
  pthread_t t;
  pthread_create(&t, NULL, &SearchThread, NULL);
  return 0;
}
"#
    .to_string()
}
