//! Constants

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref RE_USERNAME: Regex = Regex::new(r"^[a-zA-Z0-9\.\-_]+$").unwrap();
    pub(crate) static ref RE_PASSWORD: Regex =
        Regex::new(r"^[a-zA-Z0-9]*[0-9][a-zA-Z0-9]*$").unwrap();
}

// for cart reminders
pub(crate) const DEFAULT_REMINDER_TIME: &str = "11:00:00";
pub(crate) const REMINDER_JOB_SUFFIX: &str = "-notify";

// response messages
pub(crate) const USER_CREATED_MESSAGE: &str = "User was created successfully";
pub(crate) const USER_UPDATED_MESSAGE: &str = "User was updated successfully";
pub(crate) const USER_DELETED_MESSAGE: &str = "User was deleted successfully";
pub(crate) const USER_NOT_FOUND_MESSAGE: &str = "Whoopsie! 🧙‍♂️ No magic user here! Stir up some registration potion and join the fun. See you in the enchanted user realm! ✨";
pub(crate) const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";
pub(crate) const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";
pub(crate) const ADDED_TO_CART_MESSAGE: &str = "Added successfully";
pub(crate) const LONELY_CART_MESSAGE: &str = "Oopsie! Your cart feels a bit lonely. Toss in a product and let's get this shopping party started";
pub(crate) const REMINDER_SCHEDULED_MESSAGE: &str =
    "User will be notified when there's an outstanding product(s) in cart";
pub(crate) const REMINDER_STOPPED_MESSAGE: &str = "User notification stopped";
pub(crate) const CART_REMINDER_MESSAGE: &str = "Items are still in your cart! Ready to buy? Head to checkout whenever you're set. Happy shopping! 🎉";
