mod helpers;

mod contact_form;
mod notifications;
mod unsubscribe;
mod widgets;
