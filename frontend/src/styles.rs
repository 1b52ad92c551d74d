pub const CONTAINER: &str = "bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white min-h-screen w-full flex flex-col items-center justify-center p-2 sm:p-4 font-sans selection:bg-cyan-500 selection:text-white overflow-x-hidden transition-colors duration-200";
pub const HEADER: &str = "text-center mb-8";
pub const TEXT_H1: &str = "text-4xl md:text-5xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SUBTITLE: &str = "text-gray-600 dark:text-gray-400 mt-2";
pub const LAYOUT_GRID: &str = "w-full max-w-6xl grid grid-cols-1 md:grid-cols-2 gap-6 lg:gap-8 items-start flex-1";

pub const PANEL: &str = "w-full bg-white/70 dark:bg-gray-800/50 backdrop-blur-sm p-4 sm:p-6 rounded-2xl shadow-lg border border-gray-200 dark:border-gray-700 md:order-1 h-fit";
pub const PANEL_HEADER: &str = "flex justify-between items-center mb-4";
pub const PANEL_TITLE: &str = "text-2xl font-bold text-cyan-600 dark:text-cyan-400";
pub const BUTTON_DANGER: &str = "flex items-center gap-2 bg-red-600 hover:bg-red-700 text-white px-3 py-1.5 rounded-md text-sm font-semibold transition-colors";
pub const FORM: &str = "flex gap-2 mb-4";
pub const INPUT: &str = "flex-grow bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-cyan-500 transition";
pub const BUTTON_PRIMARY: &str = "bg-cyan-600 hover:bg-cyan-700 text-white rounded-md px-4 py-2 font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
pub const OPTION_LIST: &str = "space-y-2 max-h-60 overflow-y-auto pr-2";
pub const OPTION_ROW: &str = "flex justify-between items-center bg-gray-100 dark:bg-gray-700 p-2 rounded-md animate-fade-in";
pub const BUTTON_REMOVE: &str = "text-red-500 hover:text-red-400 transition-colors p-1 rounded-full";
pub const TEXT_EMPTY: &str = "text-gray-500 text-center py-4";

pub const WHEEL_PANEL: &str = "flex flex-col items-center justify-center space-y-6 md:order-2 h-fit";
pub const WHEEL_FRAME: &str = "relative w-full max-w-sm aspect-square mx-auto";
pub const WHEEL_POINTER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -mt-3 z-20 text-gray-800 dark:text-white";
pub const WHEEL_DISC: &str = "w-full h-full rounded-full border-8 border-gray-300/50 dark:border-gray-700/50 shadow-2xl overflow-hidden transition-transform ease-out";
pub const WHEEL_LABELS: &str = "absolute top-0 left-0 w-full h-full z-10 transition-transform ease-out pointer-events-none";
pub const WHEEL_LABEL_SLOT: &str = "absolute top-0 left-0 w-full h-full flex justify-center items-start";
pub const WHEEL_LABEL: &str = "pt-[15%] text-xs sm:text-sm font-bold text-white";

pub const BUTTON_SPIN: &str = "bg-green-600 hover:bg-green-700 text-white font-bold py-3 px-8 sm:px-12 rounded-full text-lg sm:text-xl shadow-lg transform hover:scale-105 transition-all disabled:bg-gray-500 disabled:cursor-not-allowed disabled:scale-100";

pub const MODAL_OVERLAY: &str = "fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center z-50 animate-fade-in";
pub const MODAL_CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl text-center shadow-2xl border border-gray-200 dark:border-gray-700 max-w-sm mx-4";
pub const MODAL_HEADING: &str = "text-lg text-gray-500 dark:text-gray-400";
pub const MODAL_RESULT: &str = "text-4xl md:text-5xl font-bold text-cyan-600 dark:text-cyan-400 my-4 break-words";
pub const BUTTON_SECONDARY: &str = "mt-6 bg-gray-200 hover:bg-gray-300 dark:bg-gray-600 dark:hover:bg-gray-700 px-6 py-2 rounded-md font-semibold transition-colors";

pub const BUTTON_THEME: &str = "fixed top-4 right-2 sm:right-4 z-30 p-3 rounded-full bg-white/10 dark:bg-gray-800/50 backdrop-blur-sm border border-gray-300/20 dark:border-gray-700 hover:bg-white/20 dark:hover:bg-gray-700/50 transition-all duration-200 shadow-lg hover:shadow-xl transform hover:scale-105";
