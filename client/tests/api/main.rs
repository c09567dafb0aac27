mod test_notifications;
mod test_privacy;
mod test_theme;
