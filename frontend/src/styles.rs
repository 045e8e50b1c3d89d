pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-4 bg-gray-50 dark:bg-gray-900";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 bg-gray-50 dark:bg-gray-900";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-all duration-200 after:absolute after:left-0 after:bottom-0 after:h-0.5 after:w-full after:origin-right after:scale-x-0 after:bg-blue-600 dark:after:bg-blue-400 after:transition-transform hover:after:origin-left hover:after:scale-x-100";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl dark:hover:shadow-[0_6px_16px_-6px_rgba(255,255,255,0.06)] p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl dark:hover:shadow-[0_6px_16px_-6px_rgba(255,255,255,0.06)] transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const AUTH_CARD: &str = "bg-white dark:bg-gray-900 rounded-xl shadow-xl dark:shadow-[0_6px_20px_-6px_rgba(255,255,255,0.04)] p-8 max-w-md w-full mx-auto backdrop-blur-lg bg-white/80 dark:bg-gray-900/80 border border-gray-200/50 dark:border-gray-700/50";
pub const AUTH_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 rounded-lg transition-all duration-200 transform hover:translate-y-[-1px] hover:shadow-lg dark:hover:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.05)] focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 dark:focus:ring-offset-gray-900";
