// Prompt templates for each assist kind.
// Placeholders: {context}, {tone_instruction}, {factuality_instruction}.

pub const JOB_DESCRIPTION_TEMPLATE: &str = r#"Write a job description for the role below.

Structure it as: a two-sentence summary, "Responsibilities" (5-7 bullets),
"Requirements" (4-6 bullets), and "Nice to have" (2-3 bullets).

{tone_instruction}

{factuality_instruction}

ROLE DETAILS:
{context}"#;

pub const OUTREACH_EMAIL_TEMPLATE: &str = r#"Write a first-touch outreach email from a recruiter to a candidate.

Include a subject line on the first line as "Subject: ...". Keep the body under
150 words, reference one specific detail from the candidate's background, and
end with a single clear call to action.

{tone_instruction}

{factuality_instruction}

CANDIDATE AND ROLE:
{context}"#;

pub const CANDIDATE_SUMMARY_TEMPLATE: &str = r#"Summarize this candidate for a hiring manager.

Write one short paragraph (3-4 sentences) covering experience, strongest
skills and likely fit, followed by up to three "Watch-outs" bullets.

{tone_instruction}

{factuality_instruction}

CANDIDATE NOTES:
{context}"#;

pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Draft interview questions for the role below.

Return a numbered list of 8 questions: 3 behavioral, 3 role-specific
technical, and 2 about motivation. Put a one-line "Listen for:" hint under each.

{tone_instruction}

{factuality_instruction}

ROLE DETAILS:
{context}"#;
