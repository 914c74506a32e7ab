use crate::domain::ContactSubmission;
use crate::email_client::SiteOwner;

pub fn owner_notification_html(submission: &ContactSubmission, received_at: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <div style="background: #0a192f; color: #64ffda; padding: 20px; text-align: center;">
        <h1>New Contact Form Submission</h1>
    </div>
    <div style="padding: 30px; background: #f9f9f9;">
        <p><strong>From:</strong> {name} ({email})</p>
        <p><strong>Subject:</strong> {subject}</p>
        <p><strong>Message:</strong></p>
        <div style="background: white; padding: 15px; border-left: 4px solid #64ffda; margin: 15px 0;">
            {message}
        </div>
    </div>
    <div style="text-align: center; padding: 20px; color: #666; font-size: 12px;">
        <p>Received: {received_at}</p>
    </div>
</div>"#,
        name = submission.name(),
        email = submission.email(),
        subject = submission.subject(),
        message = submission.message_as_html(),
        received_at = received_at,
    )
}

pub fn owner_notification_text(submission: &ContactSubmission, received_at: &str) -> String {
    format!(
        "New Contact Form Submission\n\n\
         From: {} ({})\n\
         Subject: {}\n\n\
         Message:\n\
         {}\n\n\
         ---\n\
         Received: {}\n",
        submission.name(),
        submission.email(),
        submission.subject(),
        submission.message(),
        received_at,
    )
}

pub fn confirmation_html(submission: &ContactSubmission, owner: &SiteOwner) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <div style="background: #0a192f; color: #64ffda; padding: 20px; text-align: center;">
        <h1>Message Received!</h1>
    </div>
    <div style="padding: 30px; background: #f9f9f9;">
        <p>Hello {name},</p>
        <p>Thank you for reaching out through my portfolio website. I have received your message regarding <strong>"{subject}"</strong>.</p>
        <p>I will review your message and respond as soon as possible, typically within 24-48 hours.</p>
        <p>Best regards,</p>
        <p style="color: #0a192f; font-weight: bold;">
            {owner_name}<br>
            {owner_title}
        </p>
    </div>
    <div style="text-align: center; padding: 20px; color: #666; font-size: 12px;">
        <p>This is an automated confirmation. Please do not reply to this email.</p>
    </div>
</div>"#,
        name = submission.name(),
        subject = submission.subject(),
        owner_name = owner.name,
        owner_title = owner.title,
    )
}

pub fn confirmation_text(submission: &ContactSubmission, owner: &SiteOwner) -> String {
    format!(
        "Hello {},\n\n\
         Thank you for reaching out through my portfolio website. \
         I have received your message regarding \"{}\".\n\n\
         I will review your message and respond as soon as possible, typically within 24-48 hours.\n\n\
         Best regards,\n\
         {}\n\
         {}\n\n\
         This is an automated confirmation. Please do not reply to this email.\n",
        submission.name(),
        submission.subject(),
        owner.name,
        owner.title,
    )
}
