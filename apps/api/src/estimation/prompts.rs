// Prompt template for estimate generation.
// Scope and feedback are substituted verbatim; nothing is escaped or truncated.

/// Substituted for feedback when the caller sent none.
pub const NO_FEEDBACK: &str = "None";

/// Builds the single user message sent to the LLM.
///
/// `feedback` of `None` or `""` becomes the literal `"None"`.
pub fn build_prompt(scope_text: &str, feedback: Option<&str>) -> String {
    let feedback = match feedback {
        Some(f) if !f.is_empty() => f,
        _ => NO_FEEDBACK,
    };

    format!(
        "You are a senior software project estimator and planner. Given the provided Scope of Work (SOW), produce a detailed, professional estimation document suitable for sharing with clients or stakeholders.

Requirements:
- Output must be in Markdown and presentation-ready.
- Include these sections: Work Breakdown Structure (WBS), Cost Estimate, Resources Required, Timeline.
- WBS: organize by phases (Planning, Design, Development, Testing, Deployment, Maintenance). For each phase list features/modules/tasks as sub-items and estimate hours per task.
- Cost Estimate: show effort-based estimates per task/phase with hours, hourly rates, and total cost per role (e.g., frontend developer, backend developer, QA, DevOps, UI/UX, PM). Include any third-party tool/license/cloud costs as separate line items.
- Resources Required: list roles, count of people per role, duration of involvement (weeks or months), and any external services/APIs.
- Timeline: provide task durations, dependencies, a high-level Gantt-style tabular breakdown, total project duration, and highlight the critical path.
- Format: use clean headings, tables, and bullet lists. Avoid placeholders unless necessary. Use realistic, justifiable estimates and clearly state assumptions.
- Deliverable: produce the final estimation document only (no additional commentary).

Scope of Work:
{scope_text}

User feedback (if any):
{feedback}
"
    )
}
