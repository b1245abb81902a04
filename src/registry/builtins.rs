//! Built-in commands, properties and variables with documentation.

use std::sync::LazyLock;

use super::descriptor::{CommandDef, PropertyDef, PropertyScope, VariableDef};
use super::Registries;

/// All built-in registries, lazily initialized.
pub(super) static BUILTINS: LazyLock<Registries> = LazyLock::new(|| {
    let mut registries = Registries::empty();
    registries.extend_commands(commands());
    registries.extend_properties(properties());
    registries.extend_variables(variables());
    registries
});

fn commands() -> Vec<CommandDef> {
    vec![
        // ==================== Project Setup ====================
        CommandDef::new(
            "cmake_minimum_required",
            "cmake_minimum_required(VERSION <min>[...<policy_max>] [FATAL_ERROR])",
            "Require a minimum version of cmake and set policies to match.",
        ),
        CommandDef::new(
            "project",
            "project(<PROJECT-NAME> [VERSION <major>[.<minor>...]] [LANGUAGES <language-name>...])",
            "Set the name of the project and enable languages.",
        ),
        CommandDef::new(
            "enable_language",
            "enable_language(<lang>... [OPTIONAL])",
            "Enable languages (CXX/C/OBJC/OBJCXX/Fortran/etc).",
        ),
        CommandDef::new(
            "include",
            "include(<file|module> [OPTIONAL] [RESULT_VARIABLE <var>] [NO_POLICY_SCOPE])",
            "Load and run CMake code from a file or module.",
        ),
        CommandDef::new(
            "add_subdirectory",
            "add_subdirectory(source_dir [binary_dir] [EXCLUDE_FROM_ALL])",
            "Add a subdirectory to the build.",
        ),
        // ==================== Variables ====================
        CommandDef::new(
            "set",
            "set(<variable> <value>... [PARENT_SCOPE])",
            "Set a normal, cache, or environment variable to a given value.",
        ),
        CommandDef::new(
            "unset",
            "unset(<variable> [CACHE | PARENT_SCOPE])",
            "Unset a variable, cache variable, or environment variable.",
        ),
        CommandDef::new(
            "option",
            "option(<variable> \"<help_text>\" [value])",
            "Provide a boolean option that the user can optionally select.",
        ),
        CommandDef::new(
            "list",
            "list(<subcommand> <list> ...)",
            "Operations on semicolon-separated lists.",
        ),
        CommandDef::new(
            "string",
            "string(<subcommand> ...)",
            "String operations.",
        ),
        CommandDef::new(
            "math",
            "math(EXPR <variable> \"<expression>\" [OUTPUT_FORMAT <format>])",
            "Evaluate a mathematical expression.",
        ),
        // ==================== Flow Control ====================
        CommandDef::new(
            "if",
            "if(<condition>)",
            "Conditionally execute a group of commands.",
        ),
        CommandDef::new(
            "elseif",
            "elseif(<condition>)",
            "Starts an elseif portion of an if block.",
        ),
        CommandDef::new(
            "else",
            "else([<condition>])",
            "Starts the else portion of an if block.",
        ),
        CommandDef::new(
            "endif",
            "endif([<condition>])",
            "Ends a list of commands in an if block.",
        ),
        CommandDef::new(
            "foreach",
            "foreach(<loop_var> <items>)",
            "Evaluate a group of commands for each value in a list.",
        ),
        CommandDef::new(
            "endforeach",
            "endforeach([<loop_var>])",
            "Ends a list of commands in a foreach block.",
        ),
        CommandDef::new(
            "while",
            "while(<condition>)",
            "Evaluate a group of commands while a condition is true.",
        ),
        CommandDef::new(
            "endwhile",
            "endwhile([<condition>])",
            "Ends a list of commands in a while block.",
        ),
        CommandDef::new(
            "function",
            "function(<name> [<arg1> ...])",
            "Start recording a function for later invocation as a command.",
        ),
        CommandDef::new(
            "endfunction",
            "endfunction([<name>])",
            "Ends a list of commands in a function block.",
        ),
        CommandDef::new(
            "macro",
            "macro(<name> [<arg1> ...])",
            "Start recording a macro for later invocation as a command.",
        ),
        CommandDef::new(
            "endmacro",
            "endmacro([<name>])",
            "Ends a list of commands in a macro block.",
        ),
        CommandDef::new(
            "return",
            "return([PROPAGATE <var-name>...])",
            "Return from a file, directory or function.",
        ),
        // ==================== Targets ====================
        CommandDef::new(
            "add_executable",
            "add_executable(<name> [WIN32] [MACOSX_BUNDLE] [EXCLUDE_FROM_ALL] [source1] \
            [source2 ...])",
            "Add an executable to the project using the specified source files.",
        ),
        CommandDef::new(
            "add_library",
            "add_library(<name> [STATIC | SHARED | MODULE] [EXCLUDE_FROM_ALL] [<source>...])",
            "Add a library to the project using the specified source files.",
        ),
        CommandDef::new(
            "add_custom_command",
            "add_custom_command(OUTPUT output1 [output2 ...] COMMAND command1 [ARGS] [args1...] \
            ...)",
            "Add a custom build rule to the generated build system.",
        ),
        CommandDef::new(
            "add_custom_target",
            "add_custom_target(Name [ALL] [command1 [args1...]] ...)",
            "Add a target with no output so it will always be built.",
        ),
        CommandDef::new(
            "target_link_libraries",
            "target_link_libraries(<target> <PRIVATE|PUBLIC|INTERFACE> <item>...)",
            "Specify libraries or flags to use when linking a given target and/or its dependents.",
        ),
        CommandDef::new(
            "target_include_directories",
            "target_include_directories(<target> [SYSTEM] [AFTER|BEFORE] \
            <INTERFACE|PUBLIC|PRIVATE> [items1...])",
            "Add include directories to a target.",
        ),
        CommandDef::new(
            "target_compile_definitions",
            "target_compile_definitions(<target> <INTERFACE|PUBLIC|PRIVATE> [items1...])",
            "Add compile definitions to a target.",
        ),
        CommandDef::new(
            "target_compile_options",
            "target_compile_options(<target> [BEFORE] <INTERFACE|PUBLIC|PRIVATE> [items1...])",
            "Add compile options to a target.",
        ),
        CommandDef::new(
            "set_target_properties",
            "set_target_properties(target1 target2 ... PROPERTIES prop1 value1 ...)",
            "Targets can have properties that affect how they are built.",
        ),
        CommandDef::new(
            "set_property",
            "set_property(<GLOBAL | DIRECTORY [<dir>] | TARGET [<target1> ...] | ...> [APPEND] \
            PROPERTY <name> [<value1> ...])",
            "Set a named property in a given scope.",
        ),
        CommandDef::new(
            "get_property",
            "get_property(<variable> <GLOBAL | DIRECTORY [<dir>] | TARGET <target> | ...> \
            PROPERTY <name> [SET | DEFINED | BRIEF_DOCS | FULL_DOCS])",
            "Get a property.",
        ),
        CommandDef::new(
            "get_target_property",
            "get_target_property(<VAR> target property)",
            "Get a property from a target.",
        ),
        // ==================== Discovery ====================
        CommandDef::new(
            "find_package",
            "find_package(<PackageName> [version] [EXACT] [QUIET] [REQUIRED] [[COMPONENTS] \
            [components...]])",
            "Find a package (usually provided by something external to the project).",
        ),
        CommandDef::new(
            "find_library",
            "find_library(<VAR> name1 [path1 path2 ...])",
            "Find a library.",
        ),
        CommandDef::new(
            "find_program",
            "find_program(<VAR> name1 [path1 path2 ...])",
            "Find a program.",
        ),
        CommandDef::new(
            "find_path",
            "find_path(<VAR> name1 [path1 path2 ...])",
            "Find the directory containing a file.",
        ),
        // ==================== Output & Files ====================
        CommandDef::new(
            "message",
            "message([<mode>] \"message text\" ...)",
            "Log a message.",
        ),
        CommandDef::new(
            "file",
            "file(<subcommand> ...)",
            "File manipulation command.",
        ),
        CommandDef::new(
            "configure_file",
            "configure_file(<input> <output> [COPYONLY] [ESCAPE_QUOTES] [@ONLY])",
            "Copy a file to another location and modify its contents.",
        ),
        CommandDef::new(
            "install",
            "install(TARGETS <target>... [...])",
            "Specify rules to run at install time.",
        ),
        CommandDef::new(
            "execute_process",
            "execute_process(COMMAND <cmd1> [<arguments>] [COMMAND <cmd2> [<arguments>]]...)",
            "Execute one or more child processes.",
        ),
        // ==================== Testing ====================
        CommandDef::new(
            "enable_testing",
            "enable_testing()",
            "Enable testing for current directory and below.",
        ),
        CommandDef::new(
            "add_test",
            "add_test(NAME <name> COMMAND <command> [<arg>...])",
            "Add a test to the project to be run by ctest.",
        ),
        // ==================== Deprecated ====================
        CommandDef::new(
            "add_definitions",
            "add_definitions(-DFOO -DBAR ...)",
            "Add -D define flags to the compilation of source files. Superseded by \
            add_compile_definitions.",
        )
        .deprecated(),
        CommandDef::new(
            "include_directories",
            "include_directories([AFTER|BEFORE] [SYSTEM] dir1 [dir2 ...])",
            "Add include directories to the build. Superseded by target_include_directories.",
        )
        .deprecated(),
        CommandDef::new(
            "link_libraries",
            "link_libraries([item1 [item2 [...]]])",
            "Link libraries to all targets added later. Superseded by target_link_libraries.",
        )
        .deprecated(),
        CommandDef::new(
            "exec_program",
            "exec_program(Executable [directory in which to run] [ARGS <arguments to \
            executable>] ...)",
            "Run an executable program during the processing of the CMakeList.txt file. Use \
            execute_process instead.",
        )
        .deprecated(),
        CommandDef::new(
            "make_directory",
            "make_directory(directory)",
            "Creates the specified directory. Use file(MAKE_DIRECTORY) instead.",
        )
        .deprecated(),
        CommandDef::new(
            "remove",
            "remove(VAR VALUE VALUE ...)",
            "Removes VALUE from the variable VAR. Use list(REMOVE_ITEM) instead.",
        )
        .deprecated(),
        CommandDef::new(
            "subdirs",
            "subdirs(dir1 dir2 ...)",
            "Add a list of subdirectories to the build. Use add_subdirectory instead.",
        )
        .deprecated(),
        CommandDef::new(
            "write_file",
            "write_file(filename \"message to write\"... [APPEND])",
            "Write a file. Use file(WRITE) instead.",
        )
        .deprecated(),
    ]
}

fn properties() -> Vec<PropertyDef> {
    use PropertyScope::*;

    vec![
        PropertyDef::new(
            "CXX_STANDARD",
            Target,
            "The C++ standard whose features are requested to build this target.",
        ),
        PropertyDef::new(
            "C_STANDARD",
            Target,
            "The C standard whose features are requested to build this target.",
        ),
        PropertyDef::new("OUTPUT_NAME", Target, "Output name for target files."),
        PropertyDef::new(
            "POSITION_INDEPENDENT_CODE",
            Target,
            "Whether to create a position-independent target.",
        ),
        PropertyDef::new(
            "COMPILE_DEFINITIONS",
            Target,
            "Preprocessor definitions for compiling a target's sources.",
        ),
        PropertyDef::new(
            "COMPILE_OPTIONS",
            Target,
            "List of options to pass to the compiler.",
        ),
        PropertyDef::new(
            "INCLUDE_DIRECTORIES",
            Target,
            "List of preprocessor include file search directories.",
        ),
        PropertyDef::new(
            "LINK_LIBRARIES",
            Target,
            "List of direct link dependencies.",
        ),
        PropertyDef::new(
            "RUNTIME_OUTPUT_DIRECTORY",
            Target,
            "Output directory in which to build RUNTIME target files.",
        ),
        PropertyDef::new(
            "<CONFIG>_POSTFIX",
            Target,
            "Postfix to append to the target file name for configuration <CONFIG>.",
        ),
        PropertyDef::new(
            "<LANG>_VISIBILITY_PRESET",
            Target,
            "Value for symbol visibility compile flags.",
        ),
        PropertyDef::new(
            "GENERATED",
            Source,
            "Is this source file generated as part of the build or CMake process.",
        ),
        PropertyDef::new(
            "LANGUAGE",
            Source,
            "Specify the programming language in which a source file is written.",
        ),
        PropertyDef::new("TIMEOUT", Test, "How many seconds to allow for this test."),
        PropertyDef::new(
            "WILL_FAIL",
            Test,
            "If set to true, this will invert the pass/fail flag of the test.",
        ),
        PropertyDef::new(
            "USE_FOLDERS",
            Global,
            "Use the FOLDER target property to organize targets into folders.",
        ),
        PropertyDef::new(
            "ADDITIONAL_CLEAN_FILES",
            Directory,
            "Additional files to remove during the clean stage.",
        ),
        PropertyDef::new(
            "ADVANCED",
            Cache,
            "True if entry should be hidden by default in GUIs.",
        ),
        PropertyDef::new("HELPSTRING", Cache, "Help associated with entry in GUIs."),
    ]
}

fn variables() -> Vec<VariableDef> {
    vec![
        VariableDef::new(
            "PROJECT_NAME",
            "Name of the project given to the project command.").read_only(),
        VariableDef::new(
            "PROJECT_SOURCE_DIR",
            "Top level source directory for the current project.").read_only(),
        VariableDef::new(
            "PROJECT_BINARY_DIR",
            "Full path to build directory for project.").read_only(),
        VariableDef::new(
            "CMAKE_SOURCE_DIR",
            "The path to the top level of the source tree.").read_only(),
        VariableDef::new(
            "CMAKE_BINARY_DIR",
            "The path to the top level of the build tree.").read_only(),
        VariableDef::new(
            "CMAKE_CURRENT_SOURCE_DIR",
            "The path to the source directory currently being processed.").read_only(),
        VariableDef::new(
            "CMAKE_CURRENT_BINARY_DIR",
            "The path to the binary directory currently being processed.").read_only(),
        VariableDef::new(
            "CMAKE_CURRENT_LIST_DIR",
            "Full directory of the listfile currently being processed.").read_only(),
        VariableDef::new(
            "CMAKE_BUILD_TYPE",
            "Specifies the build type on single-configuration generators.",
        ),
        VariableDef::new(
            "CMAKE_INSTALL_PREFIX",
            "Install directory used by install().",
        ),
        VariableDef::new(
            "CMAKE_MODULE_PATH",
            "Semicolon-separated list of directories to search for CMake modules.",
        ),
        VariableDef::new(
            "CMAKE_PREFIX_PATH",
            "Semicolon-separated list of directories specifying installation prefixes to be \
            searched.",
        ),
        VariableDef::new(
            "CMAKE_CXX_STANDARD",
            "Default value for CXX_STANDARD target property if set when a target is created.",
        ),
        VariableDef::new("CMAKE_VERSION", "The CMake version string.").read_only(),
        VariableDef::new(
            "CMAKE_SYSTEM_NAME",
            "The name of the operating system for which CMake is to build.",
        ),
        VariableDef::new(
            "WIN32",
            "Set to True when the target system is Windows.").read_only(),
        VariableDef::new(
            "UNIX",
            "Set to True when the target system is UNIX or UNIX-like.").read_only(),
        VariableDef::new(
            "APPLE",
            "Set to True when the target system is an Apple platform.").read_only(),
        VariableDef::new(
            "CMAKE_<LANG>_COMPILER",
            "The full path to the compiler for LANG.",
        ),
        VariableDef::new(
            "CMAKE_<LANG>_FLAGS",
            "Language-wide flags for language <LANG> used when building for all configurations.",
        ),
        VariableDef::new(
            "CMAKE_<LANG>_FLAGS_<CONFIG>",
            "Language-wide flags for language <LANG> used when building for the <CONFIG> \
            configuration.",
        ),
        VariableDef::new(
            "<PackageName>_FOUND",
            "Set by find_package() to indicate whether the package was found.").read_only(),
        VariableDef::new(
            "<PackageName>_ROOT",
            "Prefix searched by find_package(<PackageName>).",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookups() {
        let registries = &*BUILTINS;
        assert!(registries.commands.contains("add_executable"));
        assert!(registries.commands.contains("ADD_EXECUTABLE"));
        assert!(registries.commands.lookup("subdirs").unwrap().deprecated);
        assert!(!registries.commands.contains("add_exe"));

        let standard = registries.properties.lookup("CXX_STANDARD").unwrap();
        assert_eq!(standard.scope, PropertyScope::Target);
        assert!(registries.properties.contains("DEBUG_POSTFIX"));
        assert!(!registries.properties.contains("cxx_standard"));

        assert!(registries.variables.lookup("PROJECT_NAME").unwrap().read_only);
        assert!(registries.variables.contains("CMAKE_CXX_FLAGS"));
        assert!(registries.variables.contains("Boost_FOUND"));
    }
}
