//! Option shapes of the rules referenced by the built-in presets.

use crate::shape::Shape;

pub fn builtin_rules() -> Vec<(&'static str, Shape)> {
    let mut rules = core_rules();
    rules.extend(typescript_rules());
    rules.extend(react_rules());
    rules.extend(react_hooks_rules());
    rules
}

fn flag(name: &'static str) -> (&'static str, Shape) {
    (name, Shape::Bool)
}

/// An object whose fields are left unchecked.
fn open_object() -> Shape {
    Shape::Object {
        fields: Default::default(),
    }
}

fn line_limit(extra: &[&'static str]) -> Shape {
    let mut fields = vec![
        ("max", Shape::Number),
        flag("skipBlankLines"),
        flag("skipComments"),
    ];
    fields.extend(extra.iter().copied().map(flag));
    Shape::one_of([Shape::Number, Shape::object(fields)])
}

fn unused_vars() -> Shape {
    Shape::one_of([
        Shape::String,
        Shape::object([
            ("vars", Shape::String),
            ("varsIgnorePattern", Shape::String),
            ("args", Shape::String),
            ("argsIgnorePattern", Shape::String),
            ("caughtErrors", Shape::String),
            ("caughtErrorsIgnorePattern", Shape::String),
            ("destructuredArrayIgnorePattern", Shape::String),
            flag("ignoreRestSiblings"),
            flag("ignoreClassWithStaticInitBlock"),
            flag("reportUsedIgnorePattern"),
        ]),
    ])
}

fn destructuring_targets() -> Shape {
    Shape::object([flag("array"), flag("object")])
}

fn core_rules() -> Vec<(&'static str, Shape)> {
    vec![
        // recommended
        ("constructor-super", Shape::no_options()),
        ("for-direction", Shape::no_options()),
        ("getter-return", Shape::object([flag("allowImplicit")])),
        ("no-async-promise-executor", Shape::no_options()),
        ("no-case-declarations", Shape::no_options()),
        ("no-class-assign", Shape::no_options()),
        ("no-compare-neg-zero", Shape::no_options()),
        ("no-cond-assign", Shape::String),
        ("no-const-assign", Shape::no_options()),
        ("no-constant-binary-expression", Shape::no_options()),
        (
            "no-constant-condition",
            Shape::object([
                ("checkLoops", Shape::one_of([Shape::Bool, Shape::String])),
            ]),
        ),
        ("no-control-regex", Shape::no_options()),
        ("no-debugger", Shape::no_options()),
        ("no-delete-var", Shape::no_options()),
        ("no-dupe-args", Shape::no_options()),
        ("no-dupe-class-members", Shape::no_options()),
        ("no-dupe-else-if", Shape::no_options()),
        ("no-dupe-keys", Shape::no_options()),
        ("no-duplicate-case", Shape::no_options()),
        ("no-empty", Shape::object([flag("allowEmptyCatch")])),
        ("no-empty-character-class", Shape::no_options()),
        ("no-empty-pattern", Shape::object([flag("allowObjectPatternsAsParameters")])),
        ("no-empty-static-block", Shape::no_options()),
        ("no-ex-assign", Shape::no_options()),
        (
            "no-extra-boolean-cast",
            Shape::object([
                flag("enforceForInnerExpressions"),
                flag("enforceForLogicalOperands"),
            ]),
        ),
        (
            "no-fallthrough",
            Shape::object([
                ("commentPattern", Shape::String),
                flag("allowEmptyCase"),
                flag("reportUnusedFallthroughComment"),
            ]),
        ),
        ("no-func-assign", Shape::no_options()),
        ("no-global-assign", Shape::object([("exceptions", Shape::array(Shape::String))])),
        ("no-import-assign", Shape::no_options()),
        (
            "no-invalid-regexp",
            Shape::object([
                ("allowConstructorFlags", Shape::array(Shape::String)),
            ]),
        ),
        (
            "no-irregular-whitespace",
            Shape::object([
                flag("skipStrings"),
                flag("skipComments"),
                flag("skipRegExps"),
                flag("skipTemplates"),
                flag("skipJSXText"),
            ]),
        ),
        ("no-loss-of-precision", Shape::no_options()),
        ("no-misleading-character-class", Shape::object([flag("allowEscape")])),
        ("no-new-native-nonconstructor", Shape::no_options()),
        ("no-nonoctal-decimal-escape", Shape::no_options()),
        ("no-obj-calls", Shape::no_options()),
        ("no-octal", Shape::no_options()),
        ("no-prototype-builtins", Shape::no_options()),
        ("no-redeclare", Shape::object([flag("builtinGlobals")])),
        ("no-regex-spaces", Shape::no_options()),
        ("no-self-assign", Shape::object([flag("props")])),
        ("no-setter-return", Shape::no_options()),
        ("no-shadow-restricted-names", Shape::object([flag("reportGlobalThis")])),
        ("no-sparse-arrays", Shape::no_options()),
        ("no-this-before-super", Shape::no_options()),
        ("no-undef", Shape::object([flag("typeof")])),
        ("no-unexpected-multiline", Shape::no_options()),
        ("no-unreachable", Shape::no_options()),
        ("no-unsafe-finally", Shape::no_options()),
        ("no-unsafe-negation", Shape::object([flag("enforceForOrderingRelations")])),
        ("no-unsafe-optional-chaining", Shape::object([flag("disallowArithmeticOperators")])),
        ("no-unused-labels", Shape::no_options()),
        ("no-unused-private-class-members", Shape::no_options()),
        ("no-unused-vars", unused_vars()),
        ("no-useless-backreference", Shape::no_options()),
        ("no-useless-catch", Shape::no_options()),
        (
            "no-useless-escape",
            Shape::object([
                ("allowRegexCharacters", Shape::array(Shape::String)),
            ]),
        ),
        ("no-with", Shape::no_options()),
        ("require-yield", Shape::no_options()),
        ("use-isnan", Shape::object([flag("enforceForSwitchCase"), flag("enforceForIndexOf")])),
        ("valid-typeof", Shape::object([flag("requireStringLiterals")])),
        // size limits
        ("max-lines", line_limit(&[])),
        ("max-lines-per-function", line_limit(&["IIFEs"])),
        (
            "complexity",
            Shape::one_of([
                Shape::Number,
                Shape::object([
                    ("max", Shape::Number),
                    ("maximum", Shape::Number),
                    ("variant", Shape::String),
                ]),
            ]),
        ),
        (
            "max-classes-per-file",
            Shape::one_of([
                Shape::Number,
                Shape::object([flag("ignoreExpressions"), ("max", Shape::Number)]),
            ]),
        ),
        // naming
        (
            "camelcase",
            Shape::object([
                ("properties", Shape::String),
                flag("ignoreDestructuring"),
                flag("ignoreImports"),
                flag("ignoreGlobals"),
                ("allow", Shape::array(Shape::String)),
            ]),
        ),
        // code quality
        ("no-console", Shape::object([("allow", Shape::array(Shape::String))])),
        ("no-alert", Shape::no_options()),
        ("no-var", Shape::no_options()),
        (
            "prefer-const",
            Shape::object([
                ("destructuring", Shape::String),
                flag("ignoreReadBeforeAssign"),
            ]),
        ),
        ("prefer-template", Shape::no_options()),
        (
            "prefer-arrow-callback",
            Shape::object([
                flag("allowNamedFunctions"),
                flag("allowUnboundThis"),
            ]),
        ),
        ("prefer-spread", Shape::no_options()),
        ("prefer-rest-params", Shape::no_options()),
        (
            "no-param-reassign",
            Shape::object([
                flag("props"),
                ("ignorePropertyModificationsFor", Shape::array(Shape::String)),
                ("ignorePropertyModificationsForRegex", Shape::array(Shape::String)),
            ]),
        ),
        (
            "no-magic-numbers",
            Shape::object([
                ("ignore", Shape::array(Shape::one_of([Shape::Number, Shape::String]))),
                flag("ignoreArrayIndexes"),
                flag("ignoreDefaultValues"),
                flag("ignoreClassFieldInitialValues"),
                flag("enforceConst"),
                flag("detectObjects"),
            ]),
        ),
        // error handling
        ("no-throw-literal", Shape::no_options()),
        ("prefer-promise-reject-errors", Shape::object([flag("allowEmptyReject")])),
        // best practices
        ("eqeqeq", Shape::tuple([Shape::String, Shape::object([("null", Shape::String)])])),
        ("curly", Shape::tuple([Shape::String, Shape::String])),
        ("no-eval", Shape::object([flag("allowIndirect")])),
        ("no-implied-eval", Shape::no_options()),
        ("no-return-await", Shape::no_options()),
        ("require-await", Shape::no_options()),
        // imports and style
        (
            "sort-imports",
            Shape::object([
                flag("ignoreCase"),
                flag("ignoreDeclarationSort"),
                flag("ignoreMemberSort"),
                ("memberSyntaxSortOrder", Shape::array(Shape::String)),
                flag("allowSeparatedGroups"),
            ]),
        ),
        ("no-duplicate-imports", Shape::object([flag("includeExports")])),
        (
            "no-useless-rename",
            Shape::object([
                flag("ignoreDestructuring"),
                flag("ignoreImport"),
                flag("ignoreExport"),
            ]),
        ),
        (
            "object-shorthand",
            Shape::tuple([
                Shape::String,
                Shape::object([
                    flag("avoidQuotes"),
                    flag("ignoreConstructors"),
                    flag("avoidExplicitReturnArrows"),
                    ("methodsIgnorePattern", Shape::String),
                ]),
            ]),
        ),
        (
            "prefer-destructuring",
            Shape::tuple([
                Shape::object([
                    flag("array"),
                    flag("object"),
                    ("VariableDeclarator", destructuring_targets()),
                    ("AssignmentExpression", destructuring_targets()),
                ]),
                Shape::object([flag("enforceForRenamedProperties")]),
            ]),
        ),
        (
            "no-restricted-syntax",
            Shape::repeated(Shape::one_of([
                Shape::String,
                Shape::object([("selector", Shape::String), ("message", Shape::String)])
                    .require("selector"),
            ])),
        ),
        // node
        ("no-process-exit", Shape::no_options()),
        ("no-process-env", Shape::no_options()),
        ("no-sync", Shape::object([flag("allowAtRootLevel")])),
    ]
}

fn typescript_rules() -> Vec<(&'static str, Shape)> {
    vec![
        (
            "@typescript-eslint/explicit-function-return-type",
            Shape::object([
                flag("allowExpressions"),
                flag("allowTypedFunctionExpressions"),
                flag("allowHigherOrderFunctions"),
                flag("allowDirectConstAssertionInArrowFunctions"),
                flag("allowConciseArrowFunctionExpressionsStartingWithVoid"),
                flag("allowFunctionsWithoutTypeParameters"),
                flag("allowIIFEs"),
                ("allowedNames", Shape::array(Shape::String)),
            ]),
        ),
        (
            "@typescript-eslint/no-explicit-any",
            Shape::object([
                flag("fixToUnknown"),
                flag("ignoreRestArgs"),
            ]),
        ),
        ("@typescript-eslint/no-unused-vars", unused_vars()),
        (
            "@typescript-eslint/no-floating-promises",
            Shape::object([
                flag("ignoreVoid"),
                flag("ignoreIIFE"),
                flag("checkThenables"),
                ("allowForKnownSafePromises", Shape::array(Shape::Any)),
                ("allowForKnownSafeCalls", Shape::array(Shape::Any)),
            ]),
        ),
        (
            "@typescript-eslint/no-misused-promises",
            Shape::object([
                flag("checksConditionals"),
                flag("checksSpreads"),
                ("checksVoidReturn", Shape::one_of([Shape::Bool, open_object()])),
            ]),
        ),
        ("@typescript-eslint/await-thenable", Shape::no_options()),
        (
            "@typescript-eslint/no-unnecessary-type-assertion",
            Shape::object([
                ("typesToIgnore", Shape::array(Shape::String)),
                flag("checkLiteralConstAssertions"),
            ]),
        ),
        (
            "@typescript-eslint/prefer-nullish-coalescing",
            Shape::object([
                flag("ignoreConditionalTests"),
                flag("ignoreTernaryTests"),
                flag("ignoreMixedLogicalExpressions"),
                ("ignorePrimitives", Shape::one_of([Shape::Bool, open_object()])),
            ]),
        ),
        (
            "@typescript-eslint/prefer-optional-chain",
            Shape::object([
                flag("checkAny"),
                flag("checkUnknown"),
                flag("checkString"),
                flag("checkNumber"),
                flag("checkBoolean"),
                flag("checkBigInt"),
                flag("requireNullish"),
            ]),
        ),
        (
            "@typescript-eslint/consistent-type-imports",
            Shape::object([
                ("prefer", Shape::String),
                flag("disallowTypeAnnotations"),
                ("fixStyle", Shape::String),
            ]),
        ),
    ]
}

fn react_rules() -> Vec<(&'static str, Shape)> {
    vec![
        ("react/react-in-jsx-scope", Shape::no_options()),
        (
            "react/prop-types",
            Shape::object([
                ("ignore", Shape::array(Shape::String)),
                ("customValidators", Shape::array(Shape::String)),
                flag("skipUndeclared"),
            ]),
        ),
        ("react/jsx-uses-react", Shape::no_options()),
        ("react/jsx-uses-vars", Shape::no_options()),
        (
            "react/jsx-key",
            Shape::object([
                flag("checkFragmentShorthand"),
                flag("checkKeyMustBeforeSpread"),
                flag("warnOnDuplicates"),
            ]),
        ),
        ("react/jsx-no-duplicate-props", Shape::object([flag("ignoreCase")])),
        ("react/jsx-no-undef", Shape::object([flag("allowGlobals")])),
        ("react/no-children-prop", Shape::object([flag("allowFunctions")])),
        ("react/no-danger-with-children", Shape::no_options()),
        ("react/no-deprecated", Shape::no_options()),
        ("react/no-direct-mutation-state", Shape::no_options()),
        ("react/no-find-dom-node", Shape::no_options()),
        ("react/no-is-mounted", Shape::no_options()),
        ("react/no-render-return-value", Shape::no_options()),
        ("react/no-string-refs", Shape::object([flag("noTemplateLiterals")])),
        ("react/no-unescaped-entities", Shape::object([("forbid", Shape::array(Shape::Any))])),
        (
            "react/no-unknown-property",
            Shape::object([
                ("ignore", Shape::array(Shape::String)),
                flag("requireDataLowercase"),
            ]),
        ),
        ("react/require-render-return", Shape::no_options()),
        ("react/self-closing-comp", Shape::object([flag("component"), flag("html")])),
        (
            "react/jsx-filename-extension",
            Shape::object([
                ("allow", Shape::String),
                ("extensions", Shape::array(Shape::String)),
                flag("ignoreFilesWithoutCode"),
            ]),
        ),
    ]
}

fn react_hooks_rules() -> Vec<(&'static str, Shape)> {
    vec![
        ("react-hooks/rules-of-hooks", Shape::no_options()),
        (
            "react-hooks/exhaustive-deps",
            Shape::object([
                ("additionalHooks", Shape::String),
                flag("enableDangerousAutofixThisMayCauseInfiniteLoops"),
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_ids_are_unique() {
        let rules = builtin_rules();
        let ids: HashSet<&str> = rules.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn plugin_rules_are_namespaced() {
        for (id, _) in typescript_rules() {
            assert!(id.starts_with("@typescript-eslint/"), "{id}");
        }
        for (id, _) in react_rules() {
            assert!(id.starts_with("react/"), "{id}");
        }
        for (id, _) in react_hooks_rules() {
            assert!(id.starts_with("react-hooks/"), "{id}");
        }
    }
}
