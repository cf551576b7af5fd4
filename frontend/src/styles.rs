pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const RESULT_BANNER: &str = "px-6 py-4 rounded-xl bg-gradient-to-r from-pink-500 to-rose-600 text-white font-bold text-xl shadow-lg border-2 border-pink-300";
pub const WHEEL_CANVAS: &str = "w-full max-w-[500px] h-auto";
pub const SPIN_BUTTON: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-pink-300";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-pink-500 to-rose-600 hover:from-pink-600 hover:to-rose-700 shadow-lg hover:shadow-xl";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
