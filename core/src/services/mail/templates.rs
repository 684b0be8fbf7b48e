//! Email bodies for the verification and password-reset flows.

use super::MailMessage;

/// OTP verification email carrying the plaintext code
pub fn otp_verification(to: &str, otp: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Verify Your Email".to_string(),
        body_html: format!(
            "<p>Enter <b>{otp}</b> in the app to verify your email address \
             and complete the signup process.</p>\
             <br><p>This code <b>expires in 1 hour</b>.</p>"
        ),
    }
}

/// Email verification message carrying the clickable link
pub fn verification_link(to: &str, verify_url: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Please verify your email".to_string(),
        body_html: format!(
            "<p>Please verify your email address to complete the signup and \
             log into your account.</p>\
             <p>This link <b>expires in 6 hours</b>.</p>\
             <p>Press <a href=\"{verify_url}\"> here </a> to proceed.</p>"
        ),
    }
}

/// Password reset email carrying the plaintext reset code
pub fn password_reset(to: &str, reset_code: &str) -> MailMessage {
    MailMessage {
        to: to.to_string(),
        subject: "Password Reset".to_string(),
        body_html: format!(
            "<p>We heard that you lost your password.</p>\
             <p>Don't worry! Use the code below to reset it.</p>\
             <p>Copy the code and paste it in your app as asked to proceed.</p>\
             <p>This code <b>expires in 60 minutes</b>.</p>\
             <p>Copy it: \"<b>{reset_code}</b>\"</p>"
        ),
    }
}
