use patrias_study::commands;

fn main() -> anyhow::Result<()> {
    let state = patrias_study::run()?;

    let user = commands::current_user(&state)?;
    let language = commands::get_language(&state)?;
    let summary = commands::get_progress_summary(&state)?;

    tracing::info!(
        user = user.as_ref().map(|u| u.name.as_str()).unwrap_or("guest"),
        language = %language,
        completion = summary.completion,
        accuracy = summary.accuracy,
        readiness = summary.readiness,
        "Study state ready"
    );

    Ok(())
}
