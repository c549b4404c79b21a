mod contact_form;
mod home_page;
